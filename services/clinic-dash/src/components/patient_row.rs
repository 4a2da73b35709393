// services/clinic-dash/src/components/patient_row.rs
//
// Hospital CMS Dashboard - Appointment Row Component
//

use leptos::*;

use cmskit::types::AppointmentRecord;

/// Number of columns in the appointment table; the empty and error rows
/// span all of them.
pub const APPOINTMENT_COLUMNS: usize = 5;

/// One appointment as a table row: patient id, name, phone, email, time.
#[component]
pub fn AppointmentRow(appointment: AppointmentRecord) -> impl IntoView {
    view! {
        <tr class="appointment-row">
            <td>{appointment.patient_id}</td>
            <td>{appointment.patient_name}</td>
            <td>{appointment.patient_phone}</td>
            <td>{appointment.patient_email}</td>
            <td>{appointment.appointment_time}</td>
        </tr>
    }
}

// services/clinic-dash/src/components/mod.rs
//
// Hospital CMS Dashboard - UI Components
//

mod doctor_card;
mod footer;
mod header;
mod patient_row;

pub use doctor_card::DoctorCard;
pub use footer::Footer;
pub use header::Header;
pub use patient_row::{AppointmentRow, APPOINTMENT_COLUMNS};

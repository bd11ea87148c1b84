pub mod non_teaching_staff;
pub mod staff_ids;
pub mod teaching_staff;

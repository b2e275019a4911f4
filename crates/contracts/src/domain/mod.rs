pub mod a001_stream;
pub mod a002_student;
pub mod a003_staff;
pub mod a004_remark;
pub mod a005_grading;
pub mod a006_particulars;
pub mod a007_photo;
pub mod a008_timetable;

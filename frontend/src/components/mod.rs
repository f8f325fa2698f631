pub mod icons;
pub mod lecture_item;
pub mod lecture_list;
pub mod upcoming_lectures;

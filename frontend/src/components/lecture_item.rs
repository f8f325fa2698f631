use shared::models::Lecture;
use yew::prelude::*;

use crate::components::icons::CalendarIcon;

#[derive(Properties, PartialEq)]
pub struct LectureItemProps {
    pub lecture: Lecture,
}

#[function_component(LectureItem)]
pub fn lecture_item(props: &LectureItemProps) -> Html {
    let lecture = &props.lecture;
    let course_title = lecture.course_title.as_deref().filter(|t| !t.is_empty());

    html! {
        <div class="lecture-item flex items-center space-x-4">
            <CalendarIcon />
            <div class="flex-1 space-y-1">
                <p class="lecture-title text-sm font-medium leading-none">{ &lecture.title }</p>
                if let Some(course_title) = course_title {
                    <p class="lecture-course text-xs text-blue-600">{ course_title }</p>
                }
                <p class="lecture-date text-sm text-muted-foreground">{ &lecture.date }</p>
            </div>
            <div class="lecture-duration text-sm text-muted-foreground">{ &lecture.duration }</div>
        </div>
    }
}

/// Placeholder row shaped like a `LectureItem`.
#[function_component(LectureSkeleton)]
pub fn lecture_skeleton() -> Html {
    html! {
        <div class="lecture-skeleton flex items-center space-x-4 animate-pulse">
            <div class="h-5 w-5 rounded-full bg-gray-200"></div>
            <div class="flex-1 space-y-1">
                <div class="h-4 w-3/4 bg-gray-200 rounded"></div>
                <div class="h-3 w-1/2 bg-gray-200 rounded"></div>
            </div>
            <div class="h-3 w-16 bg-gray-200 rounded"></div>
        </div>
    }
}

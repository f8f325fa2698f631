use yew::prelude::*;

use crate::components::lecture_item::{LectureItem, LectureSkeleton};
use crate::state::LectureView;

const SKELETON_ROWS: usize = 3;

#[derive(Properties, PartialEq)]
pub struct LectureListProps {
    pub view: LectureView,
}

#[function_component(LectureList)]
pub fn lecture_list(props: &LectureListProps) -> Html {
    match &props.view {
        LectureView::Loading => html! {
            <div class="lecture-list space-y-4">
                { for (0..SKELETON_ROWS).map(|index| html! { <LectureSkeleton key={index} /> }) }
            </div>
        },
        LectureView::Empty => html! {
            <div class="empty-state text-center py-6 text-gray-500">
                <p>{ "No upcoming lectures scheduled." }</p>
                <p class="text-sm mt-2">{ "Add new courses to see your schedule!" }</p>
            </div>
        },
        LectureView::Failed(message) => html! {
            <div class="error-state text-center py-6 text-gray-500">
                <p>{ "Unable to load upcoming lectures." }</p>
                <p class="text-sm mt-2">{ message }</p>
            </div>
        },
        LectureView::Populated(lectures) => html! {
            <div class="lecture-list space-y-4">
                { for lectures.iter().map(|lecture| html! {
                    <LectureItem key={lecture.id} lecture={lecture.clone()} />
                })}
            </div>
        },
    }
}

// Member Form - controlled add / edit form over a local draft

use std::rc::Rc;

use teamroster_shared::{FormCommand, MemberDraft, MemberField, TeamMember};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::motion::{Enter, Hover, Motion, Press, button_motion};
use crate::theme::use_theme;

#[derive(Debug, Clone, PartialEq, Default)]
struct Draft(MemberDraft);

impl Reducible for Draft {
    type Action = (MemberField, String);

    fn reduce(self: Rc<Self>, (field, value): Self::Action) -> Rc<Self> {
        let mut next = self.0.clone();
        next.set(field, value);
        Rc::new(Draft(next))
    }
}

#[derive(Properties, PartialEq)]
pub struct MemberFormProps {
    /// Present in edit mode; seeds the draft once on mount.
    #[prop_or_default]
    pub member: Option<TeamMember>,
    pub title: AttrValue,
    pub submit_label: AttrValue,
    pub on_command: Callback<FormCommand>,
}

#[function_component(MemberForm)]
pub fn member_form(props: &MemberFormProps) -> Html {
    let palette = use_theme().mode.palette();

    let draft = {
        let initial = props.member.as_ref().map(TeamMember::draft).unwrap_or_default();
        use_reducer(move || Draft(initial))
    };

    let oninput = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(field) = MemberField::from_str(&input.name()) {
                draft.dispatch((field, input.value()));
            }
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        let on_command = props.on_command.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let current = draft.0.clone();
            if let Err(err) = current.validate() {
                gloo::console::warn!(format!("Member form not submitted: {}", err));
                return;
            }
            on_command.emit(FormCommand::Submit(current));
        })
    };

    let on_cancel = {
        let on_command = props.on_command.clone();
        Callback::from(move |_| on_command.emit(FormCommand::Cancel))
    };

    html! {
        <Motion enter={Enter::SlideUp} class={classes!("mt-4", "p-4", "rounded-lg", palette.form_panel)}>
            <h4 class="text-lg font-semibold mb-4">{&props.title}</h4>
            <form {onsubmit} class="space-y-4">
                { for MemberField::all().into_iter().map(|field| html! {
                    <input
                        type={field.input_type()}
                        name={field.as_str()}
                        value={draft.0.get(field).to_string()}
                        oninput={oninput.clone()}
                        placeholder={field.placeholder()}
                        class={classes!("w-full", "p-2", "rounded", palette.input)}
                        required=true
                    />
                })}
                <div class="flex justify-end space-x-2">
                    <button
                        type="button"
                        onclick={on_cancel}
                        class={classes!("px-4", "py-2", "rounded", button_motion(Hover::Grow, Press::Soft), palette.cancel_button)}
                    >
                        {"Cancel"}
                    </button>
                    <button
                        type="submit"
                        class={classes!("px-4", "py-2", "rounded", button_motion(Hover::Grow, Press::Soft), palette.primary_button)}
                    >
                        {&props.submit_label}
                    </button>
                </div>
            </form>
        </Motion>
    }
}

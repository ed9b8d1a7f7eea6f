// Member Card - read-only view of one member with edit / delete triggers

use teamroster_shared::{CardCommand, TeamMember};
use yew::prelude::*;

use super::icons::{Icon, IconKind};
use super::motion::{Enter, Hover, Motion, Press, button_motion};
use crate::theme::use_theme;

#[derive(Properties, PartialEq)]
pub struct MemberCardProps {
    pub member: TeamMember,
    pub on_command: Callback<CardCommand>,
}

#[function_component(MemberCard)]
pub fn member_card(props: &MemberCardProps) -> Html {
    let palette = use_theme().mode.palette();

    let on_edit = {
        let on_command = props.on_command.clone();
        Callback::from(move |_| on_command.emit(CardCommand::RequestEdit))
    };

    let on_delete = {
        let on_command = props.on_command.clone();
        let id = props.member.id;
        Callback::from(move |_| on_command.emit(CardCommand::RequestDelete(id)))
    };

    html! {
        <Motion enter={Enter::Still} hover={Hover::Grow} class={classes!("p-4", "rounded-lg", "border", palette.card)}>
            <div class="flex items-center mb-2">
                <div class={classes!("w-12", "h-12", "rounded-full", "flex", "items-center", "justify-center", "mr-4", palette.avatar)}>
                    <Icon kind={IconKind::Users} class={classes!("w-6", "h-6", palette.avatar_icon)} />
                </div>
                <div>
                    <h4 class="text-lg font-semibold">{&props.member.name}</h4>
                    <p class={classes!("text-sm", palette.muted_text)}>{&props.member.role}</p>
                </div>
            </div>
            <div class="mt-4 space-y-2">
                <p class={classes!("flex", "items-center", "text-sm", palette.muted_text)}>
                    <Icon kind={IconKind::Mail} class="w-4 h-4 mr-2" />
                    {&props.member.email}
                </p>
                <p class={classes!("flex", "items-center", "text-sm", palette.muted_text)}>
                    <Icon kind={IconKind::Phone} class="w-4 h-4 mr-2" />
                    {&props.member.phone}
                </p>
            </div>
            <div class="mt-4 flex justify-end space-x-2">
                <button
                    onclick={on_edit}
                    title="Edit"
                    class={classes!("p-2", "rounded", button_motion(Hover::Pop, Press::Firm), palette.icon_button)}
                >
                    <Icon kind={IconKind::Edit} />
                </button>
                <button
                    onclick={on_delete}
                    title="Delete"
                    class={classes!("p-2", "rounded", button_motion(Hover::Pop, Press::Firm), palette.danger_button)}
                >
                    <Icon kind={IconKind::Trash} />
                </button>
            </div>
        </Motion>
    }
}

// Team Management Page - owns the roster and the open form

use std::rc::Rc;

use teamroster_shared::{CardCommand, FormCommand, FormMode, TeamAction, TeamConfig, TeamState};
use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::components::member_card::MemberCard;
use crate::components::member_form::MemberForm;
use crate::components::motion::{Enter, Hover, Motion, Press, button_motion};
use crate::theme::use_theme;

#[derive(Debug, Clone, PartialEq, Default)]
struct TeamStore(TeamState);

impl Reducible for TeamStore {
    type Action = TeamAction;

    fn reduce(self: Rc<Self>, action: TeamAction) -> Rc<Self> {
        let mut state = self.0.clone();
        state.apply(action);
        Rc::new(TeamStore(state))
    }
}

#[derive(Properties, PartialEq)]
pub struct TeamManagementPageProps {
    #[prop_or_default]
    pub config: TeamConfig,
}

#[function_component(TeamManagementPage)]
pub fn team_management_page(props: &TeamManagementPageProps) -> Html {
    let palette = use_theme().mode.palette();

    let team = {
        let config = props.config.clone();
        use_reducer(move || TeamStore(TeamState::new(config)))
    };

    let on_add = {
        let dispatcher = team.dispatcher();
        Callback::from(move |_| dispatcher.dispatch(TeamAction::OpenCreateForm))
    };

    let on_form_command = {
        let dispatcher = team.dispatcher();
        Callback::from(move |command: FormCommand| dispatcher.dispatch(command.into()))
    };

    let state = &team.0;

    let form = match (state.form_title(), state.submit_label()) {
        (Some(title), Some(submit_label)) => {
            let member = match state.form_mode() {
                FormMode::Editing(member) => Some(member.clone()),
                _ => None,
            };
            html! {
                <MemberForm
                    key={state.form_mode().key()}
                    {member}
                    {title}
                    {submit_label}
                    on_command={on_form_command}
                />
            }
        }
        _ => html! {},
    };

    html! {
        <Motion enter={Enter::Fade} class={classes!("p-6", palette.page)}>
            <h2 class="text-3xl font-bold mb-6">{state.heading()}</h2>
            <div class={classes!("p-6", "rounded-lg", "shadow-lg", palette.panel)}>
                <div class="flex justify-between items-center mb-4">
                    <h3 class="text-xl font-semibold">
                        {state.team_title()}
                        <span class={classes!("ml-2", "text-sm", "font-normal", palette.muted_text)}>
                            {format!("({})", state.member_count())}
                        </span>
                    </h3>
                    <button
                        onclick={on_add}
                        class={classes!("flex", "items-center", "px-4", "py-2", "rounded", button_motion(Hover::Grow, Press::Soft), palette.primary_button)}
                    >
                        <Icon kind={IconKind::UserPlus} class="w-4 h-4 mr-2" />
                        {"Add Team Member"}
                    </button>
                </div>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4">
                    { for state.members().iter().map(|member| {
                        let dispatcher = team.dispatcher();
                        let member_id = member.id;
                        let on_command = Callback::from(move |command: CardCommand| {
                            dispatcher.dispatch(TeamAction::from_card(member_id, command))
                        });

                        html! {
                            <MemberCard key={member.id} member={member.clone()} {on_command} />
                        }
                    })}
                </div>
                {form}
            </div>
        </Motion>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use teamroster_shared::MemberDraft;

    fn reduce(store: TeamStore, action: TeamAction) -> TeamStore {
        Rc::try_unwrap(Rc::new(store).reduce(action)).unwrap()
    }

    #[test]
    fn test_reducer_produces_next_state() {
        let store = TeamStore::default();
        let store = reduce(store, TeamAction::OpenCreateForm);
        let store = reduce(
            store,
            FormCommand::Submit(MemberDraft::new("Ann", "Auditor", "a@x.com", "555")).into(),
        );

        assert_eq!(store.0.member_count(), 4);
        assert_eq!(store.0.form_mode(), &FormMode::Closed);
    }

    #[test]
    fn test_reducer_routes_card_commands() {
        let store = reduce(TeamStore::default(), TeamAction::from_card(1, CardCommand::RequestEdit));
        assert_eq!(store.0.form_mode().key(), "edit-1");

        let store = reduce(store, TeamAction::from_card(1, CardCommand::RequestDelete(1)));
        assert_eq!(store.0.roster().ids(), vec![2, 3]);
    }
}

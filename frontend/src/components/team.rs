use yew::prelude::*;

use crate::content::TeamMember;
use crate::motion::reveal::Reveal;

/// Portrait shown for the hovered row, falling back to the first member.
pub fn featured_member(members: &[TeamMember], hovered: usize) -> Option<&TeamMember> {
    members.get(hovered).or_else(|| members.first())
}

#[derive(Properties, PartialEq)]
pub struct TeamSectionProps {
    pub members: &'static [TeamMember],
    #[prop_or("our team")]
    pub heading: &'static str,
}

/// Names on the left; the portrait of whoever is hovered on the right.
#[function_component(TeamSection)]
pub fn team_section(props: &TeamSectionProps) -> Html {
    let hovered = use_state(|| 0usize);
    let featured = featured_member(props.members, *hovered);

    html! {
        <section id="team" class="team-section">
            <Reveal>
                <h2 class="section-title">{ props.heading }</h2>
            </Reveal>
            <div class="team-layout">
                <ul class="team-names">
                    { for props.members.iter().enumerate().map(|(i, member)| {
                        let onmouseenter = {
                            let hovered = hovered.clone();
                            Callback::from(move |_: MouseEvent| hovered.set(i))
                        };
                        html! {
                            <li
                                key={member.name}
                                class={classes!("team-name", (*hovered == i).then_some("active"))}
                                onmouseenter={onmouseenter}
                            >
                                <span class="team-member-name">{ member.name }</span>
                                <span class="team-member-role">{ member.role }</span>
                            </li>
                        }
                    }) }
                </ul>
                if let Some(member) = featured {
                    <div class="team-portrait">
                        <img key={member.name} src={member.image} alt={member.name} />
                    </div>
                }
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::TEAM;

    #[test]
    fn hovered_member_is_featured() {
        assert_eq!(featured_member(TEAM, 2), TEAM.get(2));
    }

    #[test]
    fn out_of_range_hover_falls_back_to_first() {
        assert_eq!(featured_member(TEAM, TEAM.len()), TEAM.first());
        assert_eq!(featured_member(&[], 0), None);
    }
}

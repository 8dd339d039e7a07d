//! Faculty and staff directory.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::common::{CategorySelect, EmptyState, Modal, SearchBox};
use crate::components::icons as ic;
use crate::config::ALL_CATEGORY;
use crate::core::{category_options, filter_items};
use crate::models::FacultyMember;

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

#[component]
pub fn FacultyPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let department = RwSignal::new(ALL_CATEGORY.to_string());
    let query = RwSignal::new(String::new());
    let selected = RwSignal::new(None::<FacultyMember>);

    let departments = Signal::derive(move || ctx.faculty.with_value(|m| category_options(m)));
    let visible = Memo::new(move |_| {
        let (department, query) = (department.get(), query.get());
        ctx.faculty
            .with_value(|members| filter_items(members, &department, &query))
    });

    view! {
        <section class=css::banner>
            <h1>"Our School Family"</h1>
            <p>"Meet the teachers and staff who make our school what it is."</p>
        </section>

        <div class=css::toolbar>
            <SearchBox
                query=query
                on_input=Callback::new(move |text| query.set(text))
                placeholder="Search by name or position"
            />
            <CategorySelect
                options=departments
                active=department
                on_change=Callback::new(move |d| department.set(d))
                label="Department"
            />
        </div>

        <div class=css::facultyGrid>
            <For
                each=move || visible.get()
                key=|member| member.id
                children=move |member: FacultyMember| {
                    let card = member.clone();
                    view! {
                        <button class=css::facultyCard on:click=move |_| selected.set(Some(card.clone()))>
                            <Avatar member=member.clone() />
                            <h3>{member.name.clone()}</h3>
                            <p class=css::position>{member.position.clone()}</p>
                            {(!member.department.is_empty())
                                .then(|| view! { <span class=css::department>{member.department.clone()}</span> })}
                        </button>
                    }
                }
            />
        </div>
        <Show when=move || visible.with(Vec::is_empty)>
            <EmptyState message="No faculty members match your search." />
        </Show>

        {move || {
            selected
                .get()
                .map(|member| view! {
                    <Modal title=member.name.clone() on_close=Callback::new(move |_| selected.set(None))>
                        <div class=css::profile>
                            <Avatar member=member.clone() />
                            <p class=css::position>{member.position.clone()}</p>
                            {(!member.department.is_empty())
                                .then(|| view! { <p class=css::department>{member.department.clone()}</p> })}
                            {(!member.bio.is_empty()).then(|| view! { <p>{member.bio.clone()}</p> })}
                            <ContactLinks member=member />
                        </div>
                    </Modal>
                })
        }}
    }
}

/// Photo from the content repository, or initials when it is missing.
#[component]
fn Avatar(member: FacultyMember) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let src = (!member.image.is_empty())
        .then(|| ctx.config.with_value(|c| c.content.raw_url(&member.image).ok()))
        .flatten();
    let (broken, set_broken) = signal(false);
    let initials = member.initials();

    view! {
        {move || match (&src, broken.get()) {
            (Some(src), false) => view! {
                <img
                    class=css::avatar
                    src=src.clone()
                    alt=member.name.clone()
                    loading="lazy"
                    on:error=move |_| set_broken.set(true)
                />
            }
            .into_any(),
            _ => view! { <span class=css::avatarFallback>{initials.clone()}</span> }.into_any(),
        }}
    }
}

#[component]
fn ContactLinks(member: FacultyMember) -> impl IntoView {
    let email = (!member.email.is_empty()).then(|| {
        let href = format!("mailto:{}", member.email);
        view! {
            <a class=css::contact href=href>
                <Icon icon=ic::MAIL />
                {member.email.clone()}
            </a>
        }
    });
    let phone = (!member.phone.is_empty()).then(|| {
        let href = format!("tel:{}", member.phone);
        view! {
            <a class=css::contact href=href>
                <Icon icon=ic::PHONE />
                {member.phone.clone()}
            </a>
        }
    });

    view! { <div class=css::contacts>{email}{phone}</div> }
}

use contracts::domain::a001_kpi::aggregate::DEPARTMENTS;
use contracts::domain::a005_user::{User, UserDto};
use contracts::system::navigation::Role;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a005_user::api;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::select::LabeledSelect;
use crate::shared::icons::icon;

fn blank_user() -> UserDto {
    UserDto {
        full_name: String::new(),
        email: String::new(),
        department: DEPARTMENTS[0].to_string(),
        role: Role::User,
    }
}

/// Backend rules, checked before sending.
pub fn validate_user(dto: &UserDto) -> Result<(), String> {
    User::new_for_insert(dto.clone()).validate()
}

#[component]
pub fn UserList() -> impl IntoView {
    let items = RwSignal::new(Vec::<User>::new());
    let error = RwSignal::new(None::<String>);
    let reload = RwSignal::new(0u32);
    let show_form = RwSignal::new(false);
    let form = RwSignal::new(blank_user());

    Effect::new(move |_| {
        reload.track();
        spawn_local(async move {
            match api::fetch_users().await {
                Ok(v) => items.set(v),
                Err(e) => {
                    log::error!("Failed to fetch users: {}", e);
                    error.set(Some(e));
                }
            }
        });
    });

    let save = move |_| {
        let dto = form.get_untracked();
        if let Err(e) = validate_user(&dto) {
            error.set(Some(e));
            return;
        }
        spawn_local(async move {
            match api::create(&dto).await {
                Ok(id) => {
                    log::info!("User {} created", id);
                    form.set(blank_user());
                    show_form.set(false);
                    error.set(None);
                    reload.update(|n| *n += 1);
                }
                Err(e) => error.set(Some(e)),
            }
        });
    };

    let department_options = Signal::derive(|| {
        DEPARTMENTS.iter().map(|d| (d.to_string(), d.to_string())).collect::<Vec<_>>()
    });
    let role_options = Signal::derive(|| {
        Role::ALL
            .iter()
            .map(|r| (r.as_str().to_string(), r.label().to_string()))
            .collect::<Vec<_>>()
    });

    view! {
        <div class="page page--users">
            <PageHeader title="User Management" subtitle="Accounts and their roles">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| show_form.update(|v| *v = !*v)>
                    {icon("plus")}
                    " New User"
                </Button>
            </PageHeader>

            {move || error.get().map(|e| view! {
                <MessageBar intent=MessageBarIntent::Error>{e}</MessageBar>
            })}

            <Show when=move || show_form.get()>
                <div class="panel">
                    <div class="details-form form-grid">
                        <div class="form__group">
                            <label class="form__label">"Full name"</label>
                            <input
                                class="form__input"
                                type="text"
                                prop:value=move || form.with(|f| f.full_name.clone())
                                on:input=move |ev| form.update(|f| f.full_name = event_target_value(&ev))
                            />
                        </div>
                        <div class="form__group">
                            <label class="form__label">"Email"</label>
                            <input
                                class="form__input"
                                type="email"
                                prop:value=move || form.with(|f| f.email.clone())
                                on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                            />
                        </div>
                        <LabeledSelect
                            label="Department"
                            value=Signal::derive(move || form.with(|f| f.department.clone()))
                            options=department_options
                            on_change=Callback::new(move |v: String| form.update(|f| f.department = v))
                        />
                        <LabeledSelect
                            label="Role"
                            value=Signal::derive(move || form.with(|f| f.role.as_str().to_string()))
                            options=role_options
                            on_change=Callback::new(move |v: String| {
                                if let Some(role) = Role::parse(&v) {
                                    form.update(|f| f.role = role);
                                }
                            })
                        />
                    </div>
                    <div class="details-actions">
                        <Button appearance=ButtonAppearance::Primary on_click=save>"Save"</Button>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| show_form.set(false)>
                            "Cancel"
                        </Button>
                    </div>
                </div>
            </Show>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Name"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 240px;">"Email"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 140px;">"Department"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 180px;">"Role"</TableHeaderCell>
                        <TableHeaderCell attr:style="width: 100px;">"Status"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || items.get().into_iter().map(|user| {
                        let status = if user.is_active {
                            view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>"Active"</Badge> }.into_any()
                        } else {
                            view! { <Badge appearance=BadgeAppearance::Tint>"Inactive"</Badge> }.into_any()
                        };
                        view! {
                            <TableRow>
                                <TableCell>{user.full_name}</TableCell>
                                <TableCell>{user.email}</TableCell>
                                <TableCell>{user.department}</TableCell>
                                <TableCell>{user.role.label()}</TableCell>
                                <TableCell>{status}</TableCell>
                            </TableRow>
                        }
                    }).collect_view()}
                </TableBody>
            </Table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_user() {
        assert!(validate_user(&blank_user()).is_err());
        let dto = UserDto {
            full_name: "Kofi Asante".into(),
            email: "kofi@example.com".into(),
            ..blank_user()
        };
        assert_eq!(validate_user(&dto), Ok(()));
        let bad_email = UserDto { email: "kofi".into(), ..dto };
        assert!(validate_user(&bad_email).is_err());
    }
}

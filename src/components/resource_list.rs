//! Resource List Component
//!
//! Paginated table of posts, pages or portfolio items with edit links and
//! inline delete.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{DeleteConfirmButton, PaginationBar};
use crate::context::use_admin_context;
use crate::error::Action;
use crate::list_controller::{delete_row, load_page, ListController};
use crate::models::{Cell, ResourceKind, RowView};
use crate::notify;
use crate::route::AdminRoute;

#[component]
pub fn ResourceList(kind: ResourceKind) -> impl IntoView {
    let ctx = use_admin_context();
    let config = ctx.config();
    let width = config.page_window;
    let controller = RwSignal::new(ListController::new(kind, config.page_limit));

    let go_to = move |page: u32| {
        spawn_local(async move {
            let api = ctx.api();
            if let Err(e) = load_page(&api, &controller, page).await {
                notify::alert(&e.user_message(Action::Loading, kind.label()));
            }
        });
    };

    let on_delete = move |id: i64| {
        spawn_local(async move {
            let api = ctx.api();
            match delete_row(&api, &controller, id).await {
                Ok(()) => {
                    let (done, reload_error) = controller.with_untracked(|c| {
                        (c.deleted_message(), c.error().map(|e| c.error_message(e, Action::Loading)))
                    });
                    notify::alert(&done);
                    if let Some(message) = reload_error {
                        notify::alert(&message);
                    }
                }
                Err(e) => notify::alert(&controller.with_untracked(|c| c.error_message(&e, Action::Deleting))),
            }
        });
    };

    // Load first page on mount
    Effect::new(move |_| go_to(1));

    let pagination = Signal::derive(move || controller.with(|c| c.pagination_view(width)));
    let confirm_prompt = controller.with_untracked(|c| c.delete_confirm_message());

    view! {
        <section class="resource-list">
            <div class="list-header">
                <h1>{kind.heading()}</h1>
                <a class="btn btn-primary" href=AdminRoute::New(kind).href()>
                    {format!("New {}", kind.label())}
                </a>
            </div>

            <table class="resource-table">
                <thead>
                    <tr>
                        {kind.columns().iter().map(|title| view! { <th>{*title}</th> }).collect_view()}
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || controller.with(|c| c.rows().to_vec())
                        key=|row| row.clone()
                        children=move |row| {
                            view! {
                                <ResourceRow
                                    row=row
                                    confirm_prompt=confirm_prompt.clone()
                                    on_delete=on_delete
                                />
                            }
                        }
                    />
                </tbody>
            </table>

            {move || controller.with(|c| {
                if c.is_loaded() && c.rows().is_empty() {
                    Some(view! { <p class="empty-state">{format!("No {} yet.", kind.heading().to_lowercase())}</p> }.into_any())
                } else if !c.is_loaded() && c.error().is_some() {
                    Some(view! { <p class="error-state">{format!("Error loading {}.", kind.heading().to_lowercase())}</p> }.into_any())
                } else {
                    None
                }
            })}

            <PaginationBar state=pagination on_page=go_to />
        </section>
    }
}

#[component]
fn ResourceRow(
    row: RowView,
    confirm_prompt: String,
    #[prop(into)] on_delete: Callback<i64>,
) -> impl IntoView {
    let id = row.id;

    view! {
        <tr data-id=id.to_string()>
            {row.cells.into_iter().map(cell_view).collect_view()}
            <td class="row-actions">
                <a class="btn btn-sm" href=row.edit_href>"Edit"</a>
                <DeleteConfirmButton prompt=confirm_prompt on_confirm=move |_| on_delete.run(id) />
            </td>
        </tr>
    }
}

fn cell_view(cell: Cell) -> AnyView {
    match cell {
        Cell::Text(text) => view! { <td>{text}</td> }.into_any(),
        Cell::Badge { label, active } => {
            let class = if active { "badge badge-active" } else { "badge" };
            view! { <td><span class=class>{label}</span></td> }.into_any()
        }
        Cell::Thumbnail { src, alt } => view! {
            <td><img class="thumbnail" src=src alt=alt /></td>
        }
        .into_any(),
        Cell::Placeholder(text) => view! { <td><span class="no-image">{text}</span></td> }.into_any(),
    }
}

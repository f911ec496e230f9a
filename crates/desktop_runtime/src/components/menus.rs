use super::*;

#[component]
pub(super) fn DesktopContextMenu(
    desktop_context_menu: RwSignal<Option<DesktopContextMenuState>>,
    refresh: Callback<()>,
) -> impl IntoView {
    let close = move || desktop_context_menu.set(None);

    view! {
        <Show when=move || desktop_context_menu.get().is_some() fallback=|| ()>
            {move || {
                let Some(menu) = desktop_context_menu.get() else {
                    return ().into_view();
                };
                let menu_style = format!("left:{}px;top:{}px;", menu.x, menu.y);

                view! {
                    <div
                        id="desktop-context-menu"
                        class="context-menu"
                        role="menu"
                        aria-label="Desktop context menu"
                        style=menu_style
                        on:click=move |ev| ev.stop_propagation()
                        on:contextmenu=move |ev| {
                            ev.prevent_default();
                            ev.stop_propagation();
                        }
                    >
                        <button role="menuitem" class="context-menu-item has-submenu" on:click=move |_| close()>
                            "View"
                        </button>
                        <button role="menuitem" class="context-menu-item has-submenu" on:click=move |_| close()>
                            "Sort by"
                        </button>
                        <button
                            role="menuitem"
                            class="context-menu-item"
                            on:click=move |_| {
                                refresh.call(());
                                close();
                            }
                        >
                            "Refresh"
                        </button>
                        <div class="context-menu-separator" role="separator"></div>
                        <button role="menuitem" class="context-menu-item" disabled=true>
                            "Paste"
                        </button>
                        <button role="menuitem" class="context-menu-item" disabled=true>
                            "Paste shortcut"
                        </button>
                        <div class="context-menu-separator" role="separator"></div>
                        <button role="menuitem" class="context-menu-item" on:click=move |_| close()>
                            "Personalize"
                        </button>
                    </div>
                }
                    .into_view()
            }}
        </Show>
    }
}

#[component]
pub(super) fn StartMenu() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    view! {
        <Show when=move || state.get().start_menu_open fallback=|| ()>
            <div
                id="desktop-launcher-menu"
                class="start-menu"
                role="menu"
                aria-label="Start menu"
                on:click=move |ev| ev.stop_propagation()
            >
                <div class="start-menu-programs">
                    <For
                        each=move || runtime.registry.with_value(|registry| registry.entries().to_vec())
                        key=|entry| entry.slot.app_id
                        let:entry
                    >
                        {{
                            let app_id = entry.slot.app_id;
                            view! {
                                <button
                                    id=format!("desktop-launcher-item-{}", app_id.as_str())
                                    class="start-menu-item"
                                    role="menuitem"
                                    on:click=move |_| {
                                        runtime.dispatch_action(DesktopAction::SelectStartMenuItem { app_id });
                                    }
                                >
                                    <span class="start-menu-item-glyph" aria-hidden="true">
                                        {entry.slot.icon_glyph.clone()}
                                    </span>
                                    <span class="start-menu-item-text">
                                        <span class="start-menu-item-label">{entry.slot.launcher_label.clone()}</span>
                                        <span class="start-menu-item-subtitle">{entry.slot.launcher_subtitle.clone()}</span>
                                    </span>
                                </button>
                            }
                        }}
                    </For>
                </div>
                <div class="start-menu-places">
                    <button
                        id="desktop-launcher-item-shutdown"
                        class="start-menu-shutdown"
                        role="menuitem"
                        on:click=move |_| runtime.dispatch_action(DesktopAction::RequestShutdown)
                    >
                        "Shut down"
                    </button>
                </div>
            </div>
        </Show>
    }
}

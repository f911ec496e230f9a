//! Full-screen presentation surfaces shown instead of the desktop.

use super::*;

#[component]
pub(super) fn LoginScreen() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let pending = create_memo(move |_| runtime.state.get().login_pending);
    let login = move || runtime.dispatch_action(DesktopAction::RequestLogin);

    view! {
        <div class="login-screen">
            <div class="login-card">
                <button
                    class="login-avatar"
                    aria-label="Log in"
                    disabled=move || pending.get()
                    on:click=move |_| login()
                >
                    "👤"
                </button>
                <div class="login-name">"Guest"</div>
                <div class="login-controls">
                    <Show
                        when=move || pending.get()
                        fallback=move || {
                            view! {
                                <button class="login-submit" aria-label="Login" on:click=move |_| login()>
                                    "→"
                                </button>
                            }
                        }
                    >
                        <div class="login-welcome" role="status">
                            <span class="spinner" aria-hidden="true"></span>
                            <span>"Welcome"</span>
                        </div>
                    </Show>
                </div>
            </div>
        </div>
    }
}

#[component]
pub(super) fn ShuttingDownScreen() -> impl IntoView {
    view! {
        <div class="shutdown-screen" role="status">
            <span class="spinner" aria-hidden="true"></span>
            <span>"Shutting down..."</span>
        </div>
    }
}

const STOP_SCREEN_LINES: [&str; 10] = [
    "A problem has been detected and the desktop has been shut down to prevent damage to your computer.",
    "DRIVER_IRQL_NOT_LESS_OR_EQUAL",
    "If this is the first time you've seen this Stop error screen, restart your computer. If this screen appears again, follow these steps:",
    "Check to make sure any new hardware or software is properly installed.",
    "Technical information:",
    "*** STOP: 0x000000D1 (0x0000000C, 0x00000002, 0x00000000, 0xF86B5A89)",
    "***  gv3.sys - Address F86B5A89 base at F86B5000, DateStamp 3dd9919eb",
    "Beginning dump of physical memory",
    "Physical memory dump complete.",
    "Click anywhere to continue.",
];

#[component]
pub(super) fn StopScreen() -> impl IntoView {
    let runtime = use_desktop_runtime();

    view! {
        <div
            class="stop-screen"
            role="alert"
            on:click=move |_| runtime.dispatch_action(DesktopAction::DismissStopScreen)
        >
            {STOP_SCREEN_LINES
                .into_iter()
                .map(|line| view! { <p>{line}</p> })
                .collect_view()}
        </div>
    }
}

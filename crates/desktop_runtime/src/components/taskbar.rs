use chrono::{Datelike, Days, Local, NaiveDate, NaiveDateTime};

use super::*;
use crate::reducer::taskbar_entries;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TaskbarClockSnapshot(NaiveDateTime);

impl TaskbarClockSnapshot {
    fn now() -> Self {
        Self(Local::now().naive_local())
    }

    fn date(self) -> NaiveDate {
        self.0.date()
    }
}

fn format_taskbar_clock_time(snapshot: TaskbarClockSnapshot) -> String {
    snapshot.0.format("%-I:%M %p").to_string()
}

fn format_taskbar_clock_date(snapshot: TaskbarClockSnapshot) -> String {
    snapshot.0.format("%-m/%-d/%Y").to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CalendarCell {
    day: u32,
    in_month: bool,
    today: bool,
}

/// Six Sunday-first weeks around the month of `today`, padded with the neighbouring months' days.
fn calendar_cells(today: NaiveDate) -> Vec<CalendarCell> {
    let first = today.with_day(1).unwrap_or(today);
    let lead = u64::from(first.weekday().num_days_from_sunday());
    let grid_start = first.checked_sub_days(Days::new(lead)).unwrap_or(first);

    grid_start
        .iter_days()
        .take(42)
        .map(|date| CalendarCell {
            day: date.day(),
            in_month: date.month() == today.month(),
            today: date == today,
        })
        .collect()
}

#[component]
pub(super) fn Taskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let clock_now = create_rw_signal(TaskbarClockSnapshot::now());
    let calendar_open = create_rw_signal(false);

    if let Ok(interval) = set_interval_with_handle(
        move || clock_now.set(TaskbarClockSnapshot::now()),
        Duration::from_secs(1),
    ) {
        on_cleanup(move || interval.clear());
    }

    view! {
        <footer
            class="taskbar"
            role="toolbar"
            aria-label="Desktop taskbar"
            style=format!("height:{}px;", shell_config().taskbar_height_px)
            on:click=move |ev| {
                ev.stop_propagation();
                calendar_open.set(false);
            }
        >
            <div class="taskbar-left">
                <button
                    id="taskbar-start-button"
                    class=move || if state.get().start_menu_open { "start-button open" } else { "start-button" }
                    aria-label="Start"
                    aria-haspopup="menu"
                    aria-controls="desktop-launcher-menu"
                    aria-expanded=move || state.get().start_menu_open.to_string()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        calendar_open.set(false);
                        runtime.dispatch_action(DesktopAction::ToggleStartMenu);
                    }
                >
                    <span class="start-orb" aria-hidden="true"></span>
                </button>

                <div class="taskbar-running-strip" role="group" aria-label="Running windows">
                    <For
                        each=move || taskbar_entries(&state.get())
                        key=|entry| (entry.app_id, entry.minimized, entry.highlighted)
                        let:entry
                    >
                        {{
                            let app_id = entry.app_id;
                            view! {
                                <button
                                    class=if entry.highlighted {
                                        "taskbar-window-button active"
                                    } else {
                                        "taskbar-window-button"
                                    }
                                    data-app=app_id.as_str()
                                    aria-pressed=entry.highlighted.to_string()
                                    title=entry.title.clone()
                                    on:click=move |ev| {
                                        ev.stop_propagation();
                                        runtime.dispatch_action(DesktopAction::TaskbarClick { app_id });
                                    }
                                >
                                    <span class="taskbar-app-icon" aria-hidden="true">
                                        {runtime.registry.with_value(|registry| registry.icon_glyph(app_id).to_string())}
                                    </span>
                                    <span class="taskbar-app-label">{entry.title.clone()}</span>
                                </button>
                            }
                        }}
                    </For>
                </div>
            </div>

            <div class="taskbar-right">
                <div class="taskbar-tray" role="group" aria-label="System tray">
                    <button
                        class="tray-widget"
                        aria-label=move || {
                            if state.get().audio_enabled { "Mute sounds" } else { "Unmute sounds" }
                        }
                        aria-pressed=move || (!state.get().audio_enabled).to_string()
                        on:click=move |ev| {
                            ev.stop_propagation();
                            let enabled = runtime.state.get_untracked().audio_enabled;
                            runtime.dispatch_action(DesktopAction::SetAudioEnabled { enabled: !enabled });
                        }
                    >
                        {move || if state.get().audio_enabled { "🔊" } else { "🔇" }}
                    </button>
                </div>

                <button
                    id="taskbar-clock-button"
                    class="taskbar-clock"
                    aria-haspopup="dialog"
                    aria-expanded=move || calendar_open.get().to_string()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        calendar_open.update(|open| *open = !*open);
                    }
                >
                    <span class="taskbar-clock-time">
                        {move || format_taskbar_clock_time(clock_now.get())}
                    </span>
                    <span class="taskbar-clock-date">
                        {move || format_taskbar_clock_date(clock_now.get())}
                    </span>
                </button>

                <button
                    class="taskbar-show-desktop"
                    title="Show Desktop"
                    aria-label="Show Desktop"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        runtime.dispatch_action(DesktopAction::ShowDesktop);
                    }
                ></button>
            </div>

            <Show when=move || calendar_open.get() fallback=|| ()>
                <CalendarFlyout clock_now />
            </Show>
        </footer>
    }
}

#[component]
fn CalendarFlyout(clock_now: RwSignal<TaskbarClockSnapshot>) -> impl IntoView {
    let today = clock_now.get_untracked().date();

    view! {
        <div class="calendar-flyout" role="dialog" aria-label="Calendar" on:click=move |ev| ev.stop_propagation()>
            <div class="calendar-header">{today.format("%B, %Y").to_string()}</div>
            <div class="calendar-grid">
                {["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"]
                    .into_iter()
                    .map(|label| view! { <span class="calendar-weekday">{label}</span> })
                    .collect_view()}
                {calendar_cells(today)
                    .into_iter()
                    .map(|cell| {
                        let class = match (cell.in_month, cell.today) {
                            (_, true) => "calendar-day today",
                            (true, false) => "calendar-day",
                            (false, false) => "calendar-day outside",
                        };
                        view! { <span class=class>{cell.day}</span> }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    fn snapshot(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> TaskbarClockSnapshot {
        TaskbarClockSnapshot(
            date(year, month, day)
                .and_hms_opt(hour, minute, 0)
                .expect("valid time"),
        )
    }

    #[test]
    fn clock_uses_twelve_hour_time_and_numeric_date() {
        assert_eq!(format_taskbar_clock_time(snapshot(2024, 3, 9, 0, 5)), "12:05 AM");
        assert_eq!(format_taskbar_clock_time(snapshot(2024, 3, 9, 12, 0)), "12:00 PM");
        assert_eq!(format_taskbar_clock_time(snapshot(2024, 3, 9, 23, 59)), "11:59 PM");
        assert_eq!(format_taskbar_clock_date(snapshot(2024, 3, 9, 23, 59)), "3/9/2024");
    }

    #[test]
    fn calendar_grid_is_six_weeks_with_padding() {
        // September 2024 starts on a Sunday, so there is no leading padding.
        let cells = calendar_cells(date(2024, 9, 17));
        assert_eq!(cells.len(), 42);
        assert_eq!(cells[0], CalendarCell { day: 1, in_month: true, today: false });
        assert!(cells[16].today);
        assert_eq!(cells.iter().filter(|cell| cell.in_month).count(), 30);

        // March 2024 starts on a Friday: five days of leap-year February lead the grid.
        let cells = calendar_cells(date(2024, 3, 1));
        let lead: Vec<u32> = cells.iter().take(5).map(|cell| cell.day).collect();
        assert_eq!(lead, vec![25, 26, 27, 28, 29]);
        assert!(cells[5].in_month && cells[5].today);
    }

    #[test]
    fn january_grid_borrows_from_the_previous_year() {
        // 2025-01-01 is a Wednesday.
        let cells = calendar_cells(date(2025, 1, 31));
        let lead: Vec<u32> = cells.iter().take(3).map(|cell| cell.day).collect();
        assert_eq!(lead, vec![29, 30, 31]);
        assert!(cells.iter().take(3).all(|cell| !cell.in_month));
        assert!(cells[33].today);
        assert_eq!(cells.iter().filter(|cell| cell.today).count(), 1);
    }
}

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use daybook_core::{
    is_due_soon, is_past, is_upcoming, sort_appointments, sort_tasks, Appointment, Priority, Task,
    TimeContext,
};
use daybook_core::time::instant_of;

fn ctx() -> TimeContext {
    TimeContext::new(
        Utc.with_ymd_and_hms(2026, 2, 19, 18, 30, 0).unwrap(),
        chrono_tz::America::Chicago,
    )
}

/// A spread of appointments around `now`: every 5 hours from -3 days to +3
/// days, with a few duplicates to exercise ties.
fn appointment_fixture() -> Vec<Appointment> {
    let ctx = ctx();
    let local_now = ctx.now.with_timezone(&ctx.tz).naive_local();
    let mut out = Vec::new();
    for (i, offset) in (-72..=72).step_by(5).enumerate() {
        let at = local_now + Duration::hours(offset) + Duration::minutes((i as i64 * 17) % 60);
        out.push(Appointment::new(
            format!("a{i:03}"),
            format!("appt {i}"),
            at.format("%Y-%m-%d").to_string(),
            at.format("%H:%M").to_string(),
        ));
    }
    let dup = out[3].clone();
    out.push(Appointment { id: "dup".to_string(), ..dup });
    // exactly now, in wall-clock minutes
    out.push(Appointment::new(
        "now",
        "boundary",
        local_now.format("%Y-%m-%d").to_string(),
        local_now.format("%H:%M").to_string(),
    ));
    out
}

fn task_fixture() -> Vec<Task> {
    let priorities = [
        Priority::High,
        Priority::Low,
        Priority::Medium,
        Priority::Other("someday".to_string()),
    ];
    let base = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap();
    (0..40)
        .map(|i| {
            let mut t = Task::new(format!("t{i:02}"), format!("task {i}"))
                .with_priority(priorities[i % priorities.len()].clone())
                .with_completed(i % 3 == 0)
                .with_created_at(base.and_hms_opt((i % 24) as u32, 0, 0).unwrap());
            if i % 2 == 0 {
                t = t.with_due_date(base + Duration::days((i * 7 % 11) as i64));
            }
            t
        })
        .collect()
}

#[test]
fn upcoming_and_past_are_exclusive_and_exhaustive() {
    let ctx = ctx();
    for a in appointment_fixture() {
        let up = is_upcoming(&a, &ctx).unwrap();
        let past = is_past(&a, &ctx).unwrap();
        assert_ne!(up, past, "{}", a.id);
        if is_due_soon(&a, &ctx).unwrap() {
            assert!(up, "due soon but not upcoming: {}", a.id);
        }
    }
}

#[test]
fn boundary_appointment_is_past() {
    let ctx = ctx();
    let now = appointment_fixture().into_iter().find(|a| a.id == "now").unwrap();
    assert!(is_past(&now, &ctx).unwrap());
}

#[test]
fn appointment_order_partitions_and_is_monotone() {
    let ctx = ctx();
    let sorted = sort_appointments(&appointment_fixture(), &ctx).unwrap();
    let flags: Vec<bool> = sorted.iter().map(|a| is_upcoming(a, &ctx).unwrap()).collect();

    let first_past = flags.iter().position(|up| !up).unwrap_or(flags.len());
    assert!(flags[..first_past].iter().all(|up| *up));
    assert!(flags[first_past..].iter().all(|up| !*up));

    let instants: Vec<_> = sorted
        .iter()
        .map(|a| daybook_core::time::instant_of(a, ctx.tz).unwrap())
        .collect();
    for w in instants[..first_past].windows(2) {
        assert!(w[0] <= w[1]);
    }
    for w in instants[first_past..].windows(2) {
        assert!(w[0] >= w[1]);
    }
}

#[test]
fn appointment_ties_are_stable() {
    let ctx = ctx();
    let sorted = sort_appointments(&appointment_fixture(), &ctx).unwrap();
    let pos = |id: &str| sorted.iter().position(|a| a.id == id).unwrap();
    assert_eq!(pos("a003") + 1, pos("dup"));
}

#[test]
fn tomorrow_morning_sorts_before_this_mornings_past_appointment() {
    let now = Utc.with_ymd_and_hms(2026, 2, 19, 12, 0, 0).unwrap();
    let ctx = TimeContext::utc(now);
    let list = vec![
        Appointment::new("tomorrow", "x", "2026-02-20", "09:00"),
        Appointment::new("earlier-today", "x", "2026-02-19", "08:00"),
    ];
    let sorted = sort_appointments(&list, &ctx).unwrap();
    assert_eq!(sorted[0].id, "tomorrow");
    // input untouched
    assert_eq!(list[0].id, "tomorrow");
    assert_eq!(list[1].id, "earlier-today");
}

#[test]
fn task_order_completion_then_priority() {
    let sorted = sort_tasks(&task_fixture());

    let first_done = sorted.iter().position(|t| t.completed).unwrap_or(sorted.len());
    assert!(sorted[first_done..].iter().all(|t| t.completed));

    for group in [&sorted[..first_done], &sorted[first_done..]] {
        for w in group.windows(2) {
            assert!(w[0].priority.rank() >= w[1].priority.rank());
        }
    }
}

#[test]
fn task_order_is_idempotent() {
    let once = sort_tasks(&task_fixture());
    let twice = sort_tasks(&once);
    assert_eq!(once, twice);
}

#[test]
fn dated_tasks_precede_undated_within_a_rank() {
    let sorted = sort_tasks(&task_fixture());
    for w in sorted.windows(2) {
        let same_group = w[0].completed == w[1].completed && w[0].priority.rank() == w[1].priority.rank();
        if same_group {
            assert!(
                !(w[0].due_date.is_none() && w[1].due_date.is_some()),
                "{} (undated) before {} (dated)",
                w[0].id,
                w[1].id
            );
            if let (Some(a), Some(b)) = (w[0].due_date, w[1].due_date) {
                assert!(a <= b);
            }
            if w[0].due_date.is_none() && w[1].due_date.is_none() {
                assert!(w[0].created_at >= w[1].created_at);
            }
        }
    }
}

#[test]
fn instant_helper_matches_wall_clock() {
    let a = Appointment::new("x", "x", "2026-07-04", "12:00");
    let at = instant_of(&a, chrono_tz::America::Chicago).unwrap();
    // July is CDT (UTC-5)
    assert_eq!(at.to_rfc3339(), "2026-07-04T17:00:00+00:00");
}

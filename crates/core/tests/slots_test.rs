use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone};
use chrono_tz::{America::Chicago, Tz};
use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};
use teetalk_core::{
    clock::minutes_of_day,
    models::{
        course::CourseConfig,
        tee_time::{SLOT_CAPACITY, TimePreference, TimeSlot},
    },
    slots::SlotGenerator,
};

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

fn chicago(y: i32, m: u32, d: u32, hour: u32, minute: u32) -> DateTime<Tz> {
    Chicago.with_ymd_and_hms(y, m, d, hour, minute, 0).unwrap()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn times(slots: &[TimeSlot]) -> Vec<NaiveTime> {
    slots.iter().map(|slot| slot.time_of_day).collect()
}

#[fixture]
fn course() -> CourseConfig {
    CourseConfig::new(hm(6, 0), hm(20, 0), hm(16, 0), 10)
}

#[rstest]
fn test_future_date_covers_whole_day(course: CourseConfig) {
    let generator = SlotGenerator::default();
    let slots = generator.generate(&course, date(2026, 10, 20), &chicago(2026, 10, 19, 11, 21));

    let expected_len = (minutes_of_day(course.last_tee_time) - minutes_of_day(course.open_time))
        / course.slot_interval_minutes
        + 1;
    assert_eq!(slots.len() as u32, expected_len);
    assert_eq!(slots.first().map(|s| s.time_of_day), Some(hm(6, 0)));
    assert_eq!(slots.last().map(|s| s.time_of_day), Some(hm(16, 0)));
}

#[rstest]
#[case(CourseConfig::new(hm(7, 0), hm(19, 0), hm(15, 30), 15))]
#[case(CourseConfig::new(hm(6, 30), hm(18, 0), hm(17, 59), 10))]
#[case(CourseConfig::new(hm(8, 0), hm(9, 0), hm(8, 0), 30))]
#[case(CourseConfig::new(hm(5, 0), hm(21, 0), hm(21, 0), 60))]
fn test_slots_are_strictly_increasing_and_aligned(#[case] course: CourseConfig) {
    let generator = SlotGenerator::default();
    let slots = generator.generate(&course, date(2026, 11, 2), &chicago(2026, 10, 19, 9, 0));

    let open = minutes_of_day(course.open_time);
    let last = minutes_of_day(course.last_tee_time);
    let interval = course.slot_interval_minutes;
    assert_eq!(slots.len() as u32, (last - open) / interval + 1);

    for pair in slots.windows(2) {
        assert!(pair[0].time_of_day < pair[1].time_of_day);
    }
    for slot in &slots {
        let minutes = minutes_of_day(slot.time_of_day);
        assert_eq!((minutes - open) % interval, 0);
        assert_eq!(minutes % interval, 0);
        assert!(slot.time_of_day <= course.last_tee_time);
        assert_eq!(slot.capacity, SLOT_CAPACITY);
    }
}

#[rstest]
fn test_today_starts_at_next_slot(course: CourseConfig) {
    let generator = SlotGenerator::default();
    let slots = generator.generate(&course, date(2026, 10, 19), &chicago(2026, 10, 19, 11, 21));

    assert_eq!(slots[0].time_of_day, hm(11, 30));
    assert_eq!(slots[0].display_label, "11:30 AM");
    assert_eq!(slots.last().map(|s| s.time_of_day), Some(hm(16, 0)));
}

#[rstest]
fn test_today_on_boundary_keeps_current_slot(course: CourseConfig) {
    let generator = SlotGenerator::default();
    let slots = generator.generate(&course, date(2026, 10, 19), &chicago(2026, 10, 19, 13, 40));

    assert_eq!(slots[0].time_of_day, hm(13, 40));
    assert_eq!(slots[0].display_label, "1:40 PM");
}

#[rstest]
fn test_today_before_opening_starts_at_open(course: CourseConfig) {
    let generator = SlotGenerator::default();
    let slots = generator.generate(&course, date(2026, 10, 19), &chicago(2026, 10, 19, 4, 47));

    assert_eq!(slots[0].time_of_day, hm(6, 0));
    assert_eq!(slots.len(), 61);
}

#[rstest]
fn test_today_after_last_tee_time_is_empty(course: CourseConfig) {
    let generator = SlotGenerator::default();
    let slots = generator.generate(&course, date(2026, 10, 19), &chicago(2026, 10, 19, 16, 5));

    assert!(slots.is_empty());
}

#[rstest]
fn test_last_tee_time_itself_is_offered(course: CourseConfig) {
    let generator = SlotGenerator::default();
    let slots = generator.generate(&course, date(2026, 10, 19), &chicago(2026, 10, 19, 15, 51));

    assert_eq!(times(&slots), vec![hm(16, 0)]);
}

#[rstest]
fn test_slot_started_seconds_ago_is_not_offered(course: CourseConfig) {
    let generator = SlotGenerator::default();
    let now = Chicago.with_ymd_and_hms(2026, 10, 19, 16, 0, 40).unwrap();

    assert!(generator.generate(&course, date(2026, 10, 19), &now).is_empty());

    let now = Chicago.with_ymd_and_hms(2026, 10, 19, 11, 20, 5).unwrap();
    let slots = generator.generate(&course, date(2026, 10, 19), &now);
    assert_eq!(slots.first().map(|slot| slot.time_of_day), Some(hm(11, 30)));
}

#[rstest]
fn test_late_night_rollover_is_empty() {
    let course = CourseConfig::new(hm(6, 0), hm(23, 59), hm(23, 50), 10);
    let generator = SlotGenerator::default();
    let slots = generator.generate(&course, date(2026, 10, 19), &chicago(2026, 10, 19, 23, 55));

    assert!(slots.is_empty());
}

#[rstest]
fn test_generate_is_idempotent(course: CourseConfig) {
    let generator = SlotGenerator::default();
    let now = chicago(2026, 10, 19, 9, 14);

    let first = generator.generate(&course, date(2026, 10, 19), &now);
    let second = generator.generate(&course, date(2026, 10, 19), &now);
    assert_eq!(first, second);
}

#[rstest]
fn test_advancing_clock_shrinks_to_suffix(course: CourseConfig) {
    let generator = SlotGenerator::default();
    let today = date(2026, 10, 19);

    let mut previous = generator.generate(&course, today, &chicago(2026, 10, 19, 5, 0));
    for (hour, minute) in [(6, 1), (8, 30), (11, 21), (14, 59), (16, 0), (16, 1)] {
        let current = generator.generate(&course, today, &chicago(2026, 10, 19, hour, minute));
        assert!(current.len() <= previous.len());
        assert_eq!(current.as_slice(), &previous[previous.len() - current.len()..]);
        previous = current;
    }
    assert!(previous.is_empty());
}

#[rstest]
fn test_past_date_allowed_by_default(course: CourseConfig) {
    let generator = SlotGenerator::default();
    let slots = generator.generate(&course, date(2026, 10, 18), &chicago(2026, 10, 19, 18, 0));

    assert_eq!(slots.len(), 61);
    assert_eq!(slots[0].time_of_day, hm(6, 0));
}

#[rstest]
fn test_past_date_rejected_when_configured(course: CourseConfig) {
    let generator = SlotGenerator::new(true);
    assert!(generator.rejects_past_dates());

    let now = chicago(2026, 10, 19, 8, 0);
    assert!(generator.generate(&course, date(2026, 10, 18), &now).is_empty());
    assert_eq!(generator.generate(&course, date(2026, 10, 19), &now)[0].time_of_day, hm(8, 0));
}

#[rstest]
fn test_today_is_judged_in_course_timezone(course: CourseConfig) {
    // 02:30 UTC on the 20th is still the evening of the 19th in Chicago
    let now = chrono::Utc
        .with_ymd_and_hms(2026, 10, 20, 2, 30, 0)
        .unwrap()
        .with_timezone(&Chicago);
    let generator = SlotGenerator::default();

    assert!(generator.generate(&course, date(2026, 10, 19), &now).is_empty());
    assert_eq!(generator.generate(&course, date(2026, 10, 20), &now).len(), 61);
}

#[rstest]
#[case(TimePreference::Morning, hm(6, 0), hm(11, 50))]
#[case(TimePreference::Afternoon, hm(12, 0), hm(16, 0))]
fn test_time_preference_windows(
    course: CourseConfig,
    #[case] preference: TimePreference,
    #[case] first: NaiveTime,
    #[case] last: NaiveTime,
) {
    let generator = SlotGenerator::default();
    let slots: Vec<_> = generator
        .generate(&course, date(2026, 10, 20), &chicago(2026, 10, 19, 7, 0))
        .into_iter()
        .filter(|slot| preference.admits(slot.time_of_day))
        .collect();

    assert_eq!(slots.first().map(|s| s.time_of_day), Some(first));
    assert_eq!(slots.last().map(|s| s.time_of_day), Some(last));
}

#[rstest]
fn test_evening_preference_past_last_tee_time_is_empty(course: CourseConfig) {
    let generator = SlotGenerator::default();
    let evening = generator
        .generate(&course, date(2026, 10, 20), &chicago(2026, 10, 19, 7, 0))
        .into_iter()
        .filter(|slot| TimePreference::Evening.admits(slot.time_of_day))
        .count();

    assert_eq!(evening, 0);
}

#[rstest]
#[case("morning", TimePreference::Morning)]
#[case(" Afternoon ", TimePreference::Afternoon)]
#[case("EVENING", TimePreference::Evening)]
#[case("", TimePreference::Any)]
#[case("whenever", TimePreference::Any)]
fn test_time_preference_parse(#[case] input: &str, #[case] expected: TimePreference) {
    assert_eq!(TimePreference::parse(input), expected);
}

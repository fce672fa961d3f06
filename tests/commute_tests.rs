mod common;
use common::setup_test_db;

use chrono::NaiveTime;
use ecocharge::core::add::{AddLogic, NewCommute};
use ecocharge::core::del::DeleteLogic;
use ecocharge::db::log::load_log;
use ecocharge::db::pool::DbPool;
use ecocharge::db::queries::{load_commute, load_commutes};
use ecocharge::errors::AppError;
use ecocharge::models::commute::UsageEntry;
use ecocharge::models::day_of_week::DayOfWeek;
use ecocharge::models::traffic::TrafficLevel;

fn hm(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn office_commute(user: &str) -> NewCommute {
    NewCommute {
        user_id: user.to_string(),
        name: "Home - Office".to_string(),
        round_trip: true,
        usage: vec!["fri@17:30-18:15".into(), "MON@08:00-08:45".into()],
        distance_km: 23.5,
        duration_minutes: 40.0,
        traffic: "medium".to_string(),
    }
}

#[test]
fn test_usage_entry_parsing() {
    assert_eq!(
        UsageEntry::parse("MON@08:00-08:45").unwrap(),
        UsageEntry {
            day: DayOfWeek::Mon,
            start_time: hm(8, 0),
            end_time: Some(hm(8, 45)),
        }
    );
    assert_eq!(UsageEntry::parse("sat@10:15").unwrap().end_time, None);
    assert_eq!(UsageEntry::parse("TUE@07:30").unwrap().display(), "TUE@07:30");

    assert!(matches!(UsageEntry::parse("MON 08:00"), Err(AppError::InvalidUsage(_))));
    assert!(matches!(UsageEntry::parse("XYZ@08:00"), Err(AppError::InvalidDay(_))));
    assert!(matches!(UsageEntry::parse("MON@8:00"), Err(AppError::InvalidTime(_))));
    assert!(matches!(UsageEntry::parse("MON@09:00-08:00"), Err(AppError::InvalidUsage(_))));
}

#[test]
fn test_build_sorts_usage_and_parses_traffic() {
    let c = AddLogic::build(&office_commute("max")).unwrap();

    assert_eq!(c.traffic, TrafficLevel::Medium);
    assert_eq!(c.usage[0].day, DayOfWeek::Mon);
    assert_eq!(c.usage[1].day, DayOfWeek::Fri);
    assert_eq!(c.usage_display(), "MON@08:00-08:45, FRI@17:30-18:15");
}

#[test]
fn test_build_rejects_invalid_fields() {
    let mut input = office_commute("max");
    input.traffic = "gridlock".into();
    assert!(matches!(AddLogic::build(&input), Err(AppError::InvalidTraffic(_))));

    let mut input = office_commute("  ");
    input.traffic = "low".into();
    assert!(matches!(AddLogic::build(&input), Err(AppError::InvalidInput(_))));

    let mut input = office_commute("max");
    input.usage.clear();
    assert!(matches!(AddLogic::build(&input), Err(AppError::InvalidUsage(_))));

    let mut input = office_commute("max");
    input.distance_km = -3.0;
    assert!(matches!(AddLogic::build(&input), Err(AppError::InvalidInput(_))));
}

#[test]
fn test_store_list_and_delete() {
    let db_path = setup_test_db("commute_store");
    let mut pool = DbPool::new(&db_path).unwrap();

    let first = AddLogic::apply(&mut pool, &office_commute("max")).unwrap();
    let mut other = office_commute("erika");
    other.name = "Gym".into();
    other.round_trip = false;
    other.usage = vec!["WED@19:00".into()];
    AddLogic::apply(&mut pool, &other).unwrap();

    let all = load_commutes(&mut pool, None).unwrap();
    assert_eq!(all.len(), 2);

    let max_only = load_commutes(&mut pool, Some("max")).unwrap();
    assert_eq!(max_only.len(), 1);
    assert_eq!(max_only[0], first);

    let gym = load_commutes(&mut pool, Some("erika")).unwrap().remove(0);
    assert!(!gym.is_round_trip);
    assert_eq!(gym.usage, vec![UsageEntry::parse("WED@19:00").unwrap()]);

    let removed = DeleteLogic::apply(&mut pool, first.id).unwrap();
    assert_eq!(removed.name, "Home - Office");
    assert!(load_commute(&mut pool, first.id).unwrap().is_none());

    assert!(matches!(
        DeleteLogic::apply(&mut pool, first.id),
        Err(AppError::CommuteNotFound(_))
    ));

    let ops: Vec<String> = load_log(&pool.conn)
        .unwrap()
        .into_iter()
        .map(|e| e.operation)
        .collect();
    assert!(ops.contains(&"add".to_string()));
    assert!(ops.contains(&"del".to_string()));
}

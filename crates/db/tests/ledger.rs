//! Integration tests for the transaction-scoped ledger primitives:
//! lesson counters, attendance rows and class enrollment counts.

use chrono::{NaiveDate, NaiveTime, Utc};
use gymdesk_core::listing::{Page, SortOrder};
use gymdesk_core::membership::renewal_grant;
use gymdesk_db::models::class::CreateClass;
use gymdesk_db::models::member::{CreateMember, RenewMembership};
use gymdesk_db::models::membership_plan::CreateMembershipPlan;
use gymdesk_db::models::trainer::CreateTrainer;
use gymdesk_db::repositories::{
    AttendanceRepo, ClassRepo, MemberClassRepo, MemberRepo, MembershipPlanRepo,
    TrainerAttendanceRepo, TrainerRepo,
};
use sqlx::PgPool;

fn member_with_lessons(email: &str, lesson: i32) -> CreateMember {
    CreateMember {
        first_name: "Lin".to_string(),
        last_name: "Park".to_string(),
        email: email.to_string(),
        phone_number: "555-0300".to_string(),
        date_of_birth: None,
        address: None,
        membership_plan_id: None,
        lesson: Some(lesson),
    }
}

fn trainer(email: &str) -> CreateTrainer {
    CreateTrainer {
        first_name: "Mo".to_string(),
        last_name: "Reyes".to_string(),
        specialization: None,
        email: email.to_string(),
        phone_number: "555-0400".to_string(),
        hire_date: None,
        fixed_salary: 50,
    }
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

// ---------------------------------------------------------------------------
// Member lesson credit
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_spend_lesson_decrements_by_one(pool: PgPool) {
    let member = MemberRepo::create(&pool, &member_with_lessons("one@example.com", 3))
        .await
        .unwrap();

    let mut conn = pool.acquire().await.unwrap();
    let remaining = MemberRepo::spend_lesson(&mut *conn, member.id).await.unwrap();
    assert_eq!(remaining, Some(2));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_spend_lesson_never_goes_negative(pool: PgPool) {
    let member = MemberRepo::create(&pool, &member_with_lessons("zero@example.com", 0))
        .await
        .unwrap();

    let mut conn = pool.acquire().await.unwrap();
    assert_eq!(
        MemberRepo::spend_lesson(&mut *conn, member.id).await.unwrap(),
        None
    );
    drop(conn);

    let member = MemberRepo::find_by_id(&pool, member.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(member.lesson, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_renew_applies_grant_and_is_idempotent(pool: PgPool) {
    let plan = MembershipPlanRepo::create(
        &pool,
        &CreateMembershipPlan {
            plan_name: "Ten pack".to_string(),
            price: 90.0,
            duration: 60,
            lesson: 12,
            description: None,
        },
    )
    .await
    .unwrap();
    let member = MemberRepo::create(&pool, &member_with_lessons("renew@example.com", 0))
        .await
        .unwrap();
    let input = RenewMembership {
        membership_plan_id: plan.id,
        first_name: None,
        last_name: None,
        email: None,
        phone_number: Some("555-9999".to_string()),
        address: None,
    };

    for _ in 0..2 {
        let mut tx = pool.begin().await.unwrap();
        let allotment = MembershipPlanRepo::find_lesson_allotment(&mut *tx, plan.id)
            .await
            .unwrap();
        let grant = renewal_grant(plan.id, allotment).unwrap();
        let renewed = MemberRepo::renew(&mut *tx, member.id, &grant, &input)
            .await
            .unwrap()
            .unwrap();
        tx.commit().await.unwrap();

        assert_eq!(renewed.lesson, 12);
        assert_eq!(renewed.status.as_deref(), Some("Active"));
        assert_eq!(renewed.membership_plan_id, Some(plan.id));
        assert_eq!(renewed.phone_number, "555-9999");
        assert_eq!(renewed.first_name, "Lin");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_lesson_allotment_of_missing_plan_is_none(pool: PgPool) {
    let mut conn = pool.acquire().await.unwrap();
    assert_eq!(
        MembershipPlanRepo::find_lesson_allotment(&mut *conn, 31_337)
            .await
            .unwrap(),
        None
    );
}

// ---------------------------------------------------------------------------
// Trainer lesson counter
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_record_lesson_increments_by_one(pool: PgPool) {
    let trainer = TrainerRepo::create(&pool, &trainer("count@example.com"))
        .await
        .unwrap();
    assert_eq!(trainer.lesson, 0);

    let mut conn = pool.acquire().await.unwrap();
    assert_eq!(
        TrainerRepo::record_lesson(&mut *conn, trainer.id).await.unwrap(),
        1
    );
    assert_eq!(
        TrainerRepo::record_lesson(&mut *conn, trainer.id).await.unwrap(),
        2
    );
}

// ---------------------------------------------------------------------------
// Attendance rows
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_open_then_close_attendance(pool: PgPool) {
    let member = MemberRepo::create(&pool, &member_with_lessons("door@example.com", 1))
        .await
        .unwrap();
    let today = day(2024, 6, 3);

    let mut conn = pool.acquire().await.unwrap();
    assert!(!AttendanceRepo::exists_on(&mut *conn, member.id, today)
        .await
        .unwrap());

    let opened = AttendanceRepo::open(&mut *conn, member.id, today, time(9, 0))
        .await
        .unwrap();
    assert_eq!(opened.check_out_time, None);
    assert!(AttendanceRepo::exists_on(&mut *conn, member.id, today)
        .await
        .unwrap());

    let closed = AttendanceRepo::close_open_on(&mut *conn, member.id, today, time(10, 30))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(closed.id, opened.id);
    assert_eq!(closed.check_out_time, Some(time(10, 30)));

    // Nothing left open for the day.
    assert!(
        AttendanceRepo::close_open_on(&mut *conn, member.id, today, time(11, 0))
            .await
            .unwrap()
            .is_none()
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_second_row_for_same_day_violates_unique_constraint(pool: PgPool) {
    let member = MemberRepo::create(&pool, &member_with_lessons("twice@example.com", 5))
        .await
        .unwrap();
    let today = day(2024, 6, 3);

    let mut conn = pool.acquire().await.unwrap();
    AttendanceRepo::open(&mut *conn, member.id, today, time(8, 0))
        .await
        .unwrap();
    let err = AttendanceRepo::open(&mut *conn, member.id, today, time(18, 0))
        .await
        .unwrap_err();

    let db_err = err.as_database_error().expect("expected a database error");
    assert_eq!(db_err.constraint(), Some("uq_attendance_member_date"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_attendance_date_and_range_queries(pool: PgPool) {
    let member = MemberRepo::create(&pool, &member_with_lessons("range@example.com", 5))
        .await
        .unwrap();

    let mut conn = pool.acquire().await.unwrap();
    for d in [1, 2, 5] {
        AttendanceRepo::open(&mut *conn, member.id, day(2024, 7, d), time(7, 0))
            .await
            .unwrap();
    }
    drop(conn);

    let on_second = AttendanceRepo::list_on(&pool, day(2024, 7, 2)).await.unwrap();
    assert_eq!(on_second.len(), 1);
    assert_eq!(on_second[0].member_first_name, "Lin");

    let first_week = AttendanceRepo::list_between(&pool, day(2024, 7, 1), day(2024, 7, 2))
        .await
        .unwrap();
    assert_eq!(first_week.len(), 2, "range bounds are inclusive");

    let empty = AttendanceRepo::list_on(&pool, day(2024, 7, 3)).await.unwrap();
    assert!(empty.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_attendance_page_respects_sort_and_limit(pool: PgPool) {
    let member = MemberRepo::create(&pool, &member_with_lessons("page@example.com", 5))
        .await
        .unwrap();

    let mut conn = pool.acquire().await.unwrap();
    for d in 1..=3 {
        AttendanceRepo::open(&mut *conn, member.id, day(2024, 8, d), time(7, 0))
            .await
            .unwrap();
    }
    drop(conn);

    let page = Page {
        limit: 2,
        offset: 0,
        column: "date",
        order: SortOrder::Desc,
    };
    let rows = AttendanceRepo::list_page(&pool, &page).await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].attendance.date, day(2024, 8, 3));
    assert_eq!(rows[1].attendance.date, day(2024, 8, 2));

    let next = Page { offset: 2, ..page };
    let rows = AttendanceRepo::list_page(&pool, &next).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].attendance.date, day(2024, 8, 1));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_trainer_attendance_round_trip(pool: PgPool) {
    let trainer = TrainerRepo::create(&pool, &trainer("shift@example.com"))
        .await
        .unwrap();
    let today = Utc::now().date_naive();

    let mut conn = pool.acquire().await.unwrap();
    let opened = TrainerAttendanceRepo::open(&mut *conn, trainer.id, today, time(6, 0))
        .await
        .unwrap();
    let closed = TrainerAttendanceRepo::close_open_on(&mut *conn, trainer.id, today, time(14, 0))
        .await
        .unwrap()
        .unwrap();
    drop(conn);

    assert_eq!(opened.id, closed.id);
    let listed = TrainerAttendanceRepo::list_by_trainer(&pool, trainer.id)
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].trainer_first_name, "Mo");
}

// ---------------------------------------------------------------------------
// Class enrollment
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_enrollment_rows_and_counter(pool: PgPool) {
    let lead = TrainerRepo::create(&pool, &trainer("class@example.com"))
        .await
        .unwrap();
    let class = ClassRepo::create(
        &pool,
        &CreateClass {
            trainer_id: lead.id,
            class_name: "Yoga".to_string(),
            class_description: None,
            class_date: Utc::now(),
            duration: 60,
            max_participants: 2,
            price: Some(15),
        },
    )
    .await
    .unwrap();
    let member = MemberRepo::create(&pool, &member_with_lessons("yogi@example.com", 1))
        .await
        .unwrap();

    let mut tx = pool.begin().await.unwrap();
    let locked = ClassRepo::lock_for_update(&mut *tx, class.id)
        .await
        .unwrap()
        .unwrap();
    assert!(!MemberClassRepo::exists(&mut *tx, member.id, class.id)
        .await
        .unwrap());
    MemberClassRepo::create(&mut *tx, member.id, class.id)
        .await
        .unwrap();
    ClassRepo::set_member_count(&mut *tx, class.id, locked.num_of_member + 1)
        .await
        .unwrap();
    tx.commit().await.unwrap();

    let class = ClassRepo::find_by_id(&pool, class.id).await.unwrap().unwrap();
    assert_eq!(class.num_of_member, 1);
    assert_eq!(
        MemberRepo::list_by_class(&pool, class.id).await.unwrap().len(),
        1
    );
    assert_eq!(
        ClassRepo::list_by_member(&pool, member.id).await.unwrap()[0].id,
        class.id
    );
}

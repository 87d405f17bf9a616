use anyhow::Result;
use chrono::NaiveDate;
use tempfile::{tempdir, TempDir};

use daily_quiz_bot::database::connection::DatabaseManager;
use daily_quiz_bot::database::models::TextKey;
use daily_quiz_bot::database::store::QuizStore;

async fn setup_test_db() -> Result<(DatabaseManager, TempDir)> {
    let temp_dir = tempdir()?;
    let db_path = temp_dir.path().join("test.db");
    let database_url = format!("sqlite:{}", db_path.display());

    let db = DatabaseManager::new(&database_url).await?;
    db.run_migrations().await?;

    Ok((db, temp_dir))
}

async fn insert_question(
    db: &DatabaseManager,
    date: &str,
    keyboard_size: &str,
    correct_answer: &str,
) -> Result<()> {
    sqlx::query(
        "INSERT INTO questions (date, keyboard_size, correct_answer, question_picture, \
         question_caption, answer_picture, answer_caption) VALUES (?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(date)
    .bind(keyboard_size)
    .bind(correct_answer)
    .bind("https://example.com/q.jpg")
    .bind("What is this?")
    .bind("https://example.com/a.jpg")
    .bind("It was a lighthouse")
    .execute(&db.pool)
    .await?;
    Ok(())
}

async fn insert_recipient(db: &DatabaseManager, chat_id: i64, role: &str) -> Result<()> {
    sqlx::query("INSERT INTO recipients (chat_id, role) VALUES (?, ?)")
        .bind(chat_id)
        .bind(role)
        .execute(&db.pool)
        .await?;
    Ok(())
}

fn date(d: u32, m: u32, y: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn question_lookup_and_absence() -> Result<()> {
    let (db, _temp_dir) = setup_test_db().await?;
    insert_question(&db, "05.05.2024", "3x4", "2x3").await?;

    let question = db.get_question(date(5, 5, 2024)).await?;
    assert!(question.is_some());
    let question = question.unwrap();
    assert_eq!((question.rows, question.cols), (3, 4));
    assert_eq!((question.correct_row, question.correct_col), (1, 2));
    assert_eq!(question.question_caption, "What is this?");

    assert!(db.get_question(date(6, 5, 2024)).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn invalid_question_row_is_an_error() -> Result<()> {
    let (db, _temp_dir) = setup_test_db().await?;
    insert_question(&db, "05.05.2024", "2x2", "3x1").await?;

    assert!(db.get_question(date(5, 5, 2024)).await.is_err());
    Ok(())
}

#[tokio::test]
async fn answer_record_cas_rejects_second_write() -> Result<()> {
    let (db, _temp_dir) = setup_test_db().await?;
    let quiz_date = date(5, 5, 2024);

    assert!(db.get_answer_record("42", quiz_date).await?.is_none());

    let won = db
        .set_answer_record("42", quiz_date, "correct 2024-05-05 21:00:00")
        .await?;
    assert!(won);

    let lost = db
        .set_answer_record("42", quiz_date, "wrong 2024-05-05 21:00:05")
        .await?;
    assert!(!lost);

    assert_eq!(
        db.get_answer_record("42", quiz_date).await?.unwrap(),
        "correct 2024-05-05 21:00:00"
    );
    Ok(())
}

#[tokio::test]
async fn answer_record_cas_fills_empty_cells() -> Result<()> {
    let (db, _temp_dir) = setup_test_db().await?;
    let quiz_date = date(5, 5, 2024);

    // A pre-created empty cell counts as absent.
    sqlx::query("INSERT INTO results (user_id, date, value) VALUES ('42', '05.05.2024', '')")
        .execute(&db.pool)
        .await?;
    assert!(db.get_answer_record("42", quiz_date).await?.is_none());

    let won = db
        .set_answer_record("42", quiz_date, "wrong 2024-05-05 21:00:00")
        .await?;
    assert!(won);
    assert!(db.get_answer_record("42", quiz_date).await?.is_some());
    Ok(())
}

#[tokio::test]
async fn answer_records_are_keyed_per_user_and_date() -> Result<()> {
    let (db, _temp_dir) = setup_test_db().await?;

    assert!(db.set_answer_record("a", date(5, 5, 2024), "correct t1").await?);
    assert!(db.set_answer_record("b", date(5, 5, 2024), "wrong t2").await?);
    assert!(db.set_answer_record("a", date(6, 5, 2024), "wrong t3").await?);

    assert_eq!(
        db.get_answer_record("a", date(5, 5, 2024)).await?.unwrap(),
        "correct t1"
    );
    assert_eq!(
        db.get_answer_record("b", date(5, 5, 2024)).await?.unwrap(),
        "wrong t2"
    );
    Ok(())
}

#[tokio::test]
async fn recipients_require_exactly_one_per_role() -> Result<()> {
    let (db, _temp_dir) = setup_test_db().await?;

    // Nothing configured yet.
    assert!(db.get_recipients().await.is_err());

    insert_recipient(&db, 100, "publish").await?;
    assert!(db.get_recipients().await.is_err());

    insert_recipient(&db, 200, "admin").await?;
    let recipients = db.get_recipients().await?;
    assert_eq!(recipients.publish, 100);
    assert_eq!(recipients.admin, 200);

    // A second publish destination is a configuration error.
    insert_recipient(&db, 300, "publish").await?;
    assert!(db.get_recipients().await.is_err());
    Ok(())
}

#[tokio::test]
async fn text_lookup() -> Result<()> {
    let (db, _temp_dir) = setup_test_db().await?;

    sqlx::query("INSERT INTO i18n (key, value) VALUES ('late', 'Too late!')")
        .execute(&db.pool)
        .await?;

    assert_eq!(
        db.get_text(TextKey::Late).await?.unwrap(),
        "Too late!"
    );
    assert!(db.get_text(TextKey::Correct).await?.is_none());
    Ok(())
}

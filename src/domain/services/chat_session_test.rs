use anyhow::Result;

use super::ChatSession;
use crate::domain::models::Role;
use crate::domain::services::HistoryStore;

#[tokio::test]
async fn it_grows_by_two_turns_per_cycle() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let mut session = ChatSession::new(HistoryStore::new(dir.path().join("history.json")));

    for idx in 1..=4 {
        session
            .record_turn(&format!("question {idx}"), &format!("answer {idx}"))
            .await?;
        assert_eq!(session.history().len(), idx * 2);
    }

    let turns = session.history().turns();
    assert_eq!(turns[0].message(), "question 1");
    assert_eq!(turns[0].role(), Role::User);
    assert_eq!(turns[7].message(), "answer 4");
    assert_eq!(turns[7].role(), Role::Assistant);

    return Ok(());
}

#[tokio::test]
async fn it_mirrors_every_turn_to_disk() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("history.json");
    let mut session = ChatSession::new(HistoryStore::new(path.clone()));

    session.record_turn("Up or down?", "Up.").await?;
    assert_eq!(&HistoryStore::new(path.clone()).load().await?, session.history());

    session.record_turn("How much?", "$5,000.").await?;
    assert_eq!(&HistoryStore::new(path).load().await?, session.history());

    return Ok(());
}

#[tokio::test]
async fn it_resumes_from_the_store() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("history.json");

    let mut first = ChatSession::open(HistoryStore::new(path.clone())).await?;
    assert!(first.history().is_empty());
    first.record_turn("Up or down?", "Up.").await?;

    let mut second = ChatSession::open(HistoryStore::new(path.clone())).await?;
    assert_eq!(second.history().len(), 2);
    second.record_turn("Sure?", "No.").await?;

    assert_eq!(HistoryStore::new(path).load().await?.len(), 4);

    return Ok(());
}

#[tokio::test]
async fn it_does_not_record_turns_that_fail_to_save() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("history.json");
    let mut session = ChatSession::new(HistoryStore::new(path.clone()));
    session.record_turn("Up or down?", "Up.").await?;

    // Point the store at a directory so the next save fails.
    session.store = HistoryStore::new(dir.path().to_path_buf());
    assert!(session.record_turn("Sure?", "No.").await.is_err());
    assert_eq!(session.history().len(), 2);
    assert_eq!(&HistoryStore::new(path).load().await?, session.history());

    return Ok(());
}

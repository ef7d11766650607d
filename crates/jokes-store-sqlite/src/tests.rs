//! Integration tests for `SqliteStore` against an in-memory database.

use jokes_core::{
  joke::{Category, DEFAULT_AUTHOR, JokeId, JokePatch, NewJoke},
  store::JokeStore,
};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn joke(text: &str, rating: f64, category: Category) -> NewJoke {
  NewJoke::new(text, rating, category)
}

// ─── Create / get ────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_and_get() {
  let s = store().await;

  let created = s
    .create(joke("I used to be a banker", 6.0, Category::Malo))
    .await
    .unwrap();
  assert_eq!(created.author, DEFAULT_AUTHOR);

  let fetched = s.get(created.id).await.unwrap().unwrap();
  assert_eq!(fetched.id, created.id);
  assert_eq!(fetched.text, "I used to be a banker");
  assert_eq!(fetched.rating, 6.0);
  assert_eq!(fetched.category, Category::Malo);
}

#[tokio::test]
async fn get_missing_returns_none() {
  let s = store().await;
  assert!(s.get(JokeId::new()).await.unwrap().is_none());
}

#[tokio::test]
async fn created_ids_are_distinct() {
  let s = store().await;
  let a = s.create(joke("a", 1.0, Category::Chistoso)).await.unwrap();
  let b = s.create(joke("a", 1.0, Category::Chistoso)).await.unwrap();
  assert_ne!(a.id, b.id);
}

// ─── Latest ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn latest_on_empty_store_is_none() {
  let s = store().await;
  assert!(s.latest().await.unwrap().is_none());
}

#[tokio::test]
async fn latest_follows_insertion_order() {
  let s = store().await;
  s.create(joke("first", 3.0, Category::DadJoke)).await.unwrap();
  s.create(joke("second", 3.0, Category::DadJoke)).await.unwrap();
  let third = s.create(joke("third", 3.0, Category::DadJoke)).await.unwrap();

  let latest = s.latest().await.unwrap().unwrap();
  assert_eq!(latest.id, third.id);

  s.delete(third.id).await.unwrap();
  assert_eq!(s.latest().await.unwrap().unwrap().text, "second");
}

// ─── Update ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn update_only_touches_provided_fields() {
  let s = store().await;
  let mut input = joke("original", 4.0, Category::HumorNegro);
  input.author = "Ana".into();
  let created = s.create(input).await.unwrap();

  let updated = s
    .update(created.id, JokePatch {
      rating: Some(8.0),
      ..JokePatch::default()
    })
    .await
    .unwrap()
    .unwrap();
  assert_eq!(updated.rating, 8.0);

  let fetched = s.get(created.id).await.unwrap().unwrap();
  assert_eq!(fetched.rating, 8.0);
  assert_eq!(fetched.text, "original");
  assert_eq!(fetched.author, "Ana");
  assert_eq!(fetched.category, Category::HumorNegro);
  assert_eq!(fetched.created_at, created.created_at);
}

#[tokio::test]
async fn update_every_field() {
  let s = store().await;
  let created = s.create(joke("old", 2.0, Category::Malo)).await.unwrap();

  s.update(created.id, JokePatch {
    text:     Some("new".into()),
    author:   Some("Luis".into()),
    rating:   Some(9.0),
    category: Some(Category::Chistoso),
  })
  .await
  .unwrap();

  let fetched = s.get(created.id).await.unwrap().unwrap();
  assert_eq!(fetched.text, "new");
  assert_eq!(fetched.author, "Luis");
  assert_eq!(fetched.rating, 9.0);
  assert_eq!(fetched.category, Category::Chistoso);
}

#[tokio::test]
async fn update_missing_returns_none() {
  let s = store().await;
  let patch = JokePatch {
    text: Some("x".into()),
    ..JokePatch::default()
  };
  assert!(s.update(JokeId::new(), patch).await.unwrap().is_none());
}

#[tokio::test]
async fn update_after_delete_returns_none() {
  let s = store().await;
  let created = s.create(joke("gone", 3.0, Category::Malo)).await.unwrap();
  s.delete(created.id).await.unwrap();

  let patch = JokePatch {
    rating: Some(4.0),
    ..JokePatch::default()
  };
  assert!(s.update(created.id, patch).await.unwrap().is_none());
  assert!(s.get(created.id).await.unwrap().is_none());
}

#[tokio::test]
async fn concurrent_update_and_delete_agree_on_existence() {
  let s = store().await;

  for round in 0..20 {
    let created = s
      .create(joke("racing", 5.0, Category::Chistoso))
      .await
      .unwrap();
    let patch = JokePatch {
      text: Some(format!("round {round}")),
      ..JokePatch::default()
    };

    let (updated, deleted) = tokio::join!(
      {
        let s = s.clone();
        let id = created.id;
        tokio::spawn(async move { s.update(id, patch).await })
      },
      {
        let s = s.clone();
        let id = created.id;
        tokio::spawn(async move { s.delete(id).await })
      },
    );
    let updated = updated.unwrap().unwrap();
    assert!(deleted.unwrap().unwrap());

    // An update that reports success saw the row and wrote to it.
    if let Some(joke) = updated {
      assert_eq!(joke.text, format!("round {round}"));
    }
    assert!(s.get(created.id).await.unwrap().is_none());
  }
}

// ─── Delete ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_twice_reports_absence_the_second_time() {
  let s = store().await;
  let created = s.create(joke("bye", 5.0, Category::Malo)).await.unwrap();

  assert!(s.delete(created.id).await.unwrap());
  assert!(!s.delete(created.id).await.unwrap());
  assert!(s.get(created.id).await.unwrap().is_none());
}

// ─── Queries ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn count_by_category() {
  let s = store().await;
  assert_eq!(s.count_by_category(Category::Malo).await.unwrap(), 0);

  s.create(joke("a", 1.0, Category::Malo)).await.unwrap();
  s.create(joke("b", 1.0, Category::Malo)).await.unwrap();
  s.create(joke("c", 1.0, Category::Chistoso)).await.unwrap();

  assert_eq!(s.count_by_category(Category::Malo).await.unwrap(), 2);
  assert_eq!(s.count_by_category(Category::Chistoso).await.unwrap(), 1);
  assert_eq!(s.count_by_category(Category::DadJoke).await.unwrap(), 0);
}

#[tokio::test]
async fn list_by_rating_matches_exactly() {
  let s = store().await;
  let a = s.create(joke("a", 5.0, Category::Malo)).await.unwrap();
  s.create(joke("b", 6.0, Category::Malo)).await.unwrap();
  let c = s.create(joke("c", 5.0, Category::DadJoke)).await.unwrap();
  s.create(joke("d", 5.5, Category::DadJoke)).await.unwrap();

  let fives = s.list_by_rating(5.0).await.unwrap();
  let ids: Vec<_> = fives.iter().map(|j| j.id).collect();
  assert_eq!(ids, vec![a.id, c.id]);
  assert!(fives.iter().all(|j| j.rating == 5.0));

  assert!(s.list_by_rating(10.0).await.unwrap().is_empty());
}

#[tokio::test]
async fn reopening_a_file_store_keeps_records() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("jokes.db");

  let id = {
    let s = SqliteStore::open(&path).await.unwrap();
    s.create(joke("persisted", 7.0, Category::Chistoso))
      .await
      .unwrap()
      .id
  };

  let s = SqliteStore::open(&path).await.unwrap();
  assert_eq!(s.get(id).await.unwrap().unwrap().text, "persisted");
}

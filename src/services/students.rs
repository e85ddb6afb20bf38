use sqlx::SqlitePool;

use crate::models::student::Student;

/// Pass/fail cutoff. A fixed business constant, not configurable.
pub const PASS_MARK: i64 = 300;

/// Listing filter, parsed from the `/filter/{status}` path segment.
/// Anything that is not "pass" or "fail" means the full, unfiltered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarksFilter {
    Pass,
    Fail,
    All,
}

impl MarksFilter {
    pub fn from_status(status: &str) -> Self {
        match status {
            "pass" => MarksFilter::Pass,
            "fail" => MarksFilter::Fail,
            _ => MarksFilter::All,
        }
    }
}

/// All students, store-native order. No ORDER BY on purpose; callers must
/// not rely on row order.
pub async fn list(pool: &SqlitePool) -> Result<Vec<Student>, sqlx::Error> {
    sqlx::query_as::<_, Student>("SELECT id, name, marks FROM students")
        .fetch_all(pool)
        .await
}

pub async fn filtered(
    pool: &SqlitePool,
    filter: MarksFilter,
) -> Result<Vec<Student>, sqlx::Error> {
    let sql = match filter {
        MarksFilter::Pass => "SELECT id, name, marks FROM students WHERE marks >= ?",
        MarksFilter::Fail => "SELECT id, name, marks FROM students WHERE marks < ?",
        MarksFilter::All => return list(pool).await,
    };
    sqlx::query_as::<_, Student>(sql)
        .bind(PASS_MARK)
        .fetch_all(pool)
        .await
}

pub async fn fetch(pool: &SqlitePool, id: i64) -> Result<Option<Student>, sqlx::Error> {
    sqlx::query_as::<_, Student>("SELECT id, name, marks FROM students WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await
}

pub async fn add(pool: &SqlitePool, name: &str, marks: i64) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO students (name, marks) VALUES (?, ?)")
        .bind(name)
        .bind(marks)
        .execute(pool)
        .await?;
    Ok(())
}

/// Full replace of name and marks; the id is immutable. Updating a missing
/// id affects zero rows, which is not an error.
pub async fn update(
    pool: &SqlitePool,
    id: i64,
    name: &str,
    marks: i64,
) -> Result<(), sqlx::Error> {
    sqlx::query("UPDATE students SET name = ?, marks = ? WHERE id = ?")
        .bind(name)
        .bind(marks)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Deleting a missing id is a silent no-op.
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM students WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::tests::test_pool;

    async fn seed(pool: &SqlitePool) {
        for (name, marks) in [("Alice", 350), ("Bob", 200), ("Carol", 300), ("Dave", -5)] {
            add(pool, name, marks).await.unwrap();
        }
    }

    fn names(students: &[Student]) -> Vec<&str> {
        students.iter().map(|s| s.name.as_str()).collect()
    }

    #[tokio::test]
    async fn pass_and_fail_partition_the_listing() {
        let pool = test_pool().await;
        seed(&pool).await;

        let all = list(&pool).await.unwrap();
        let pass = filtered(&pool, MarksFilter::Pass).await.unwrap();
        let fail = filtered(&pool, MarksFilter::Fail).await.unwrap();

        assert!(pass.iter().all(|s| s.marks >= PASS_MARK));
        assert!(fail.iter().all(|s| s.marks < PASS_MARK));
        assert_eq!(pass.len() + fail.len(), all.len());

        // Exactly-300 lands on the pass side.
        assert!(names(&pass).contains(&"Carol"));
        assert!(names(&pass).contains(&"Alice"));
        assert!(names(&fail).contains(&"Bob"));
        assert!(names(&fail).contains(&"Dave"));
    }

    #[tokio::test]
    async fn unknown_status_means_unfiltered() {
        let pool = test_pool().await;
        seed(&pool).await;

        assert_eq!(MarksFilter::from_status("pass"), MarksFilter::Pass);
        assert_eq!(MarksFilter::from_status("fail"), MarksFilter::Fail);
        assert_eq!(MarksFilter::from_status("PASS"), MarksFilter::All);
        assert_eq!(MarksFilter::from_status("anything"), MarksFilter::All);

        let all = filtered(&pool, MarksFilter::All).await.unwrap();
        assert_eq!(all.len(), list(&pool).await.unwrap().len());
    }

    #[tokio::test]
    async fn update_replaces_exactly_one_row() {
        let pool = test_pool().await;
        seed(&pool).await;

        let before = list(&pool).await.unwrap();
        let target = before.iter().find(|s| s.name == "Bob").unwrap().clone();

        update(&pool, target.id, "Robert", 310).await.unwrap();

        let after = list(&pool).await.unwrap();
        assert_eq!(after.len(), before.len());
        let updated = fetch(&pool, target.id).await.unwrap().unwrap();
        assert_eq!(updated.name, "Robert");
        assert_eq!(updated.marks, 310);

        // Every other row is untouched.
        for s in &before {
            if s.id != target.id {
                assert_eq!(fetch(&pool, s.id).await.unwrap().as_ref(), Some(s));
            }
        }
    }

    #[tokio::test]
    async fn delete_removes_the_row() {
        let pool = test_pool().await;
        seed(&pool).await;

        let target = list(&pool).await.unwrap().remove(0);
        delete(&pool, target.id).await.unwrap();

        assert!(fetch(&pool, target.id).await.unwrap().is_none());
        assert_eq!(list(&pool).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn mutating_a_missing_id_is_a_no_op() {
        let pool = test_pool().await;
        seed(&pool).await;
        let before = list(&pool).await.unwrap();

        delete(&pool, 9999).await.unwrap();
        update(&pool, 9999, "Ghost", 0).await.unwrap();

        assert_eq!(list(&pool).await.unwrap(), before);
        assert!(fetch(&pool, 9999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn marks_are_not_range_checked() {
        let pool = test_pool().await;
        add(&pool, "Edge", i64::MAX).await.unwrap();
        add(&pool, "Hole", i64::MIN).await.unwrap();

        let all = list(&pool).await.unwrap();
        assert!(all.iter().any(|s| s.marks == i64::MAX));
        assert!(all.iter().any(|s| s.marks == i64::MIN));
    }
}

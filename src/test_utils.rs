#[cfg(test)]
pub mod fixtures {
    use crate::models::domain::{Quiz, QuizQuestion, User, UserRole};

    /// Creates an unpublished quiz with no settings
    pub fn test_quiz(id: &str) -> Quiz {
        Quiz {
            description: Some("<p>Weekly check-in</p>".to_string()),
            course: Some("RS101".to_string()),
            ..Quiz::new(id, &format!("Quiz {}", id))
        }
    }

    /// Creates a quiz with one question per entry in `points`
    pub fn quiz_with_questions(id: &str, points: &[Option<f64>]) -> Quiz {
        let questions = points
            .iter()
            .enumerate()
            .map(|(i, points)| QuizQuestion {
                id: Some(format!("{}-{}", id, i + 1)),
                title: Some(format!("Question {}", i + 1)),
                points: *points,
                ..Default::default()
            })
            .collect();

        Quiz {
            questions: Some(questions),
            ..test_quiz(id)
        }
    }

    /// Creates a signed-in user with the given role
    pub fn user_with_role(role: UserRole) -> User {
        let username = format!("{:?}", role).to_lowercase();
        User::new(&format!("{}-id", username), &username, role)
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::models::domain::UserRole;

    #[test]
    fn test_fixtures_test_quiz() {
        let quiz = test_quiz("Q1");
        assert_eq!(quiz.id, "Q1");
        assert_eq!(quiz.title, "Quiz Q1");
        assert!(!quiz.published);
    }

    #[test]
    fn test_fixtures_quiz_with_questions() {
        let quiz = quiz_with_questions("Q1", &[Some(2.0), None]);
        assert_eq!(quiz.question_count(), 2);
        assert_eq!(quiz.total_points(), 2.0);
    }

    #[test]
    fn test_fixtures_user_with_role() {
        let user = user_with_role(UserRole::Faculty);
        assert_eq!(user.username, "faculty");
        assert_eq!(user.role, UserRole::Faculty);
    }
}

pub mod seeded_random;

pub mod calculate_score;

pub mod analyze_food_image;
pub mod clear_analysis_history;
pub mod get_analysis;
pub mod get_analysis_history;

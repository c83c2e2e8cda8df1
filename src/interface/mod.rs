pub mod prompts;
pub mod render;

pub use prompts::{
    collect_new_ingredient, collect_new_recipe, parse_number, prompt_ingredient, prompt_number,
    prompt_optional_number, prompt_select_recipe, prompt_yes_no,
};
pub use render::{
    display_cost_breakdown, display_ingredient_list, display_price_result, display_recipe_list,
    display_sell_evaluation, format_money, format_pct,
};

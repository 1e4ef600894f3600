//! Built-in level content. Used whenever no catalog file is configured.

use crate::domain::{Challenge, DEFAULT_MIN_LENGTH};

fn challenge(
  level_number: i32,
  title: &str,
  goal: &str,
  task: &str,
  hint: &str,
  badge_name: &str,
  required_patterns: &[&str],
) -> Challenge {
  Challenge {
    level_number,
    title: title.into(),
    goal: goal.into(),
    task: task.into(),
    hint: hint.into(),
    badge_name: badge_name.into(),
    required_patterns: required_patterns.iter().map(|p| p.to_string()).collect(),
    min_length: DEFAULT_MIN_LENGTH,
  }
}

/// The seven reference levels, in level order.
pub fn seed_challenges() -> Vec<Challenge> {
  vec![
    challenge(
      1,
      "The Missing Value Detective",
      "Find and deal with missing values in a messy customer table.",
      "The `age` and `city` columns contain gaps. Explain how you would locate the missing values and what you would do with them.",
      "Count the gaps per column first, then decide between filling and dropping.",
      "Gap Finder",
      &["isnull|isna", "fillna|dropna", "mean|median|mode"],
    ),
    Challenge {
      min_length: 40,
      ..challenge(
        2,
        "The Duplicate Hunter",
        "Remove repeated orders without losing legitimate ones.",
        "Some orders were exported twice. Describe how you would detect the duplicate rows and remove them, and which columns define a duplicate.",
        "Two orders are only the same if the order id matches; think about which copy to keep.",
        "Twin Slayer",
        &["duplicated", "drop_duplicates", "subset|keep"],
      )
    },
    challenge(
      3,
      "The Type Caster",
      "Turn text columns into the types they should have been.",
      "`price` was read as text and `quantity` as float. Explain how you would convert both to proper numeric types.",
      "Look at how a column's dtype can be changed and what to do with values that don't parse.",
      "Shape Shifter",
      &["astype|to_numeric", "int|float", "dtype"],
    ),
    challenge(
      4,
      "The String Surgeon",
      "Parse a column of messy date strings into real dates.",
      "The `signup_date` column mixes formats and contains junk like 'n/a'. Explain how you would turn it into datetimes without crashing on the bad values.",
      "There is a parser for dates that can turn unparseable values into NaT instead of raising.",
      "Date Whisperer",
      &["to_datetime", "errors|coerce"],
    ),
    challenge(
      5,
      "The Outlier Tamer",
      "Keep a few extreme values from skewing the averages.",
      "A handful of `salary` values are 100x larger than the rest. Describe how you would detect these outliers and limit their influence.",
      "Quartiles give you a robust fence; values beyond it can be clipped or filtered.",
      "Fence Builder",
      &["quantile|iqr|percentile", "clip|filter|remove|cap", "outlier"],
    ),
    challenge(
      6,
      "The Merge Master",
      "Combine two tables that describe the same customers.",
      "You have `customers` and `orders` tables sharing a `customer_id`. Explain how you would combine them and what kind of join you would pick.",
      "Name the key you join on and say which rows you want to keep.",
      "Bridge Builder",
      &["merge|join", "on=|key|customer_id", "inner|left|outer|how"],
    ),
    Challenge {
      min_length: 40,
      ..challenge(
        7,
        "The Pipeline Architect",
        "Chain the cleaning steps into one reproducible summary.",
        "Produce total revenue per region, sorted from highest to lowest, from the cleaned orders table. Describe the full chain of operations.",
        "Group first, aggregate, then sort; method chaining keeps it readable.",
        "Grand Architect",
        &["groupby", "agg|sum|mean", "sort_values|sort", "pipe|chain|method"],
      )
    },
  ]
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn seven_levels_in_order() {
    let levels: Vec<i32> = seed_challenges().iter().map(|c| c.level_number).collect();
    assert_eq!(levels, vec![1, 2, 3, 4, 5, 6, 7]);
  }

  #[test]
  fn long_form_levels_need_forty_chars() {
    for c in seed_challenges() {
      let expected = if matches!(c.level_number, 2 | 7) { 40 } else { 25 };
      assert_eq!(c.min_length, expected, "level {}", c.level_number);
    }
  }
}

use colored::Colorize;
use strindex::filter::FilterSpec;
use strindex::model::StringProperties;

pub(super) fn print_properties(value: &str, props: &StringProperties) {
    println!("{}", value.bold());
    println!("--------------------------------");
    print_field("length", props.length);
    print_field("is_palindrome", props.is_palindrome);
    print_field("unique_characters", props.unique_characters);
    print_field("word_count", props.word_count);
    print_field("sha256_hash", &props.sha256_hash);

    let freq: Vec<String> = props
        .character_frequency_map
        .iter()
        .map(|(c, n)| format!("{:?}:{}", c, n))
        .collect();
    print_field("character_frequency", freq.join(" "));
}

pub(super) fn print_filter(query: &str, filter: &FilterSpec) {
    println!("{} {}", "query:".dimmed(), query);
    if let Some(v) = filter.is_palindrome {
        print_field("is_palindrome", v);
    }
    if let Some(v) = filter.min_length {
        print_field("min_length", v);
    }
    if let Some(v) = filter.max_length {
        print_field("max_length", v);
    }
    if let Some(v) = filter.word_count {
        print_field("word_count", v);
    }
    if let Some(v) = filter.contains_character {
        print_field("contains_character", format!("{:?}", v));
    }
    if let Err(e) = filter.validate() {
        println!("{}", e.to_string().yellow());
    }
}

fn print_field(name: &str, value: impl std::fmt::Display) {
    println!("{:>20}  {}", name.cyan(), value);
}

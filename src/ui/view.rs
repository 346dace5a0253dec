use super::style;

pub fn print_form_header(title: &str, prompts: usize) {
    println!();
    println!(
        "  {} {}",
        style::accent(format!("[{prompts} questions]")),
        style::header(title)
    );
    println!("  {}", style::dim("─".repeat(50)));
}

pub fn print_description(text: &str) {
    for line in text.lines() {
        println!("  {} {}", style::accent("›"), style::dim(line));
    }
}

pub fn print_done(answered: usize) {
    println!(
        "  {} {}",
        style::success("✓"),
        style::dim(format!("{answered} answers collected"))
    );
}

pub fn print_cancelled() {
    eprintln!("  {} {}", style::yellow("✗"), style::yellow("Questionnaire cancelled"));
}

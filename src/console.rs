//! Interactive console session.
//!
//! Mirrors the pipeline end to end: query prompt, spinner while the
//! extract/search stages run, ranked candidate list, validated 1-based
//! choice, recipe printout, then the follow-up question loop against a
//! fresh assistant bound to the fetched recipe.

use std::io::{self, Write};
use std::sync::Arc;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use cooking_pipeline::assistant::{RecipeAssistant, render_recipe};
use cooking_pipeline::{DEFAULT_SEARCH_LIMIT, RecipeSummary, SelectionError};
use llm_gateway::LlmGateway;
use recipe_directory::RecipeDirectoryClient;

/// Runs one interactive session.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let llm = Arc::new(LlmGateway::from_env()?);
    let directory = RecipeDirectoryClient::from_env()?;

    println!("{}", "Welcome to the Cooking Assistant!".bold());

    let query = prompt("What would you like to cook today? ")?;
    if query.is_empty() {
        println!("You need to enter something to begin.");
        return Ok(());
    }

    let spinner = make_spinner("Thinking... finding the best options for you");

    let outcome = cooking_pipeline::run_pipeline(
        llm.as_ref(),
        &directory,
        &query,
        DEFAULT_SEARCH_LIMIT,
        |options| {
            spinner.finish_and_clear();
            print_candidates(options);
            prompt_choice(options.len())
        },
    )
    .await;

    let state = match outcome {
        Ok(state) => state,
        Err(e) => {
            spinner.finish_and_clear();
            println!("{} {}", "Could not prepare a recipe:".red(), e);
            return Ok(());
        }
    };

    // run_pipeline only succeeds with the detail present.
    let Some(recipe) = state.detailed_recipe else {
        println!("{}", "No detailed recipe found.".red());
        return Ok(());
    };

    println!("\n{}", "--- Detailed Recipe ---".bold());
    println!("{}", render_recipe(&recipe));
    println!("{}\n", "--- End of Recipe ---".bold());

    println!("You can now ask questions about this recipe. Type 'exit' to quit.\n");
    let mut assistant = RecipeAssistant::new(llm.clone(), recipe);

    loop {
        let question = prompt("Your question: ")?;
        if question.eq_ignore_ascii_case("exit") {
            println!("Thank you for using the Cooking Assistant. Goodbye!");
            break;
        }
        if question.is_empty() {
            println!("Please enter a question or type 'exit' to finish.\n");
            continue;
        }

        let answer = assistant.ask(&question).await;
        println!("\n{} {}\n", "Assistant:".cyan().bold(), answer);
    }

    Ok(())
}

/// Prints the ranked candidates with their 1-based positions.
fn print_candidates(options: &[RecipeSummary]) {
    println!("\n{}", "Recipes found:".bold());
    for (idx, recipe) in options.iter().enumerate() {
        println!("{}: {}", idx + 1, recipe.title);
    }
}

/// Prompts until a valid 1-based choice is entered.
///
/// Only fails when stdin is closed before a valid choice was read.
fn prompt_choice(len: usize) -> Result<i64, SelectionError> {
    loop {
        let line = match prompt(&format!("\nSelect a recipe (1-{len}): ")) {
            Ok(line) => line,
            Err(_) => {
                return Err(SelectionError::InvalidSelection { choice: 0, len });
            }
        };
        match line.parse::<i64>() {
            Ok(choice) if (1..=len as i64).contains(&choice) => return Ok(choice),
            Ok(_) => println!("Invalid choice. Try again."),
            Err(_) => println!("Invalid input. Enter a number."),
        }
    }
}

/// Prints `text` without a newline and reads one trimmed line.
fn prompt(text: &str) -> io::Result<String> {
    print!("{}", text.bold());
    io::stdout().flush()?;

    let mut line = String::new();
    let n = io::stdin().read_line(&mut line)?;
    if n == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
    }
    Ok(line.trim().to_string())
}

fn make_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .expect("valid spinner template")
            .tick_chars("-\\|/ "),
    );
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb.set_message(msg.to_string());
    pb
}

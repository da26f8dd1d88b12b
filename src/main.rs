use std::io::{self, BufRead, Write};

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use zaika_concierge::{Concierge, Config, Result};

fn main() -> Result<()> {
    // Setup logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                // Default to info level if RUST_LOG is not set
                "zaika_concierge=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Loading configuration...");
    let config = Config::from_env()?;
    let concierge = Concierge::new(&config);

    run_chat(&concierge)
}

/// Interactive chat loop for trying out the concierge from a terminal.
fn run_chat(concierge: &Concierge) -> Result<()> {
    println!("🍢 ZAIKA BBQ GRILL - ELITE CULINARY CONCIERGE 🍢");
    println!("✨ Your Personal Pakistani Cuisine Expert & Hospitality Professional ✨");
    println!("📍 1199 Amboy Ave, Edison, NJ 08837 | 📞 (732) 709-3700");
    println!("\n💬 Ask me anything about our menu, culture, dietary needs, or dining experience!");
    println!("Type 'quit' to exit\n");
    println!("🌟 Try these sophisticated requests:");
    println!("• 'What's trending on your Instagram this week?'");
    println!("• 'I'm diabetic — what are my best options?'");
    println!("• 'Surprise me with something authentically Pakistani'");
    println!("• 'Planning a celebration for 8 people'");
    println!("• 'I love spicy food — challenge me!'");
    println!("• 'What makes Pakistani cuisine different from Indian?'");
    println!("• 'Best value meal that still feels special?'\n");
    println!("🚗 Type your address or zip code to get directions to Zaika BBQ & Grill!\n");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        print!("Guest: ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let query = line.trim();
        if ["quit", "exit", "bye"].contains(&query.to_lowercase().as_str()) {
            println!("\n✨ Thank you for experiencing Zaika! We can't wait to serve you authentic Pakistani flavors soon! 🍽️");
            break;
        }

        let response = concierge.generate_response(query);
        println!("\nZaika Concierge: {}\n", response);
    }
    Ok(())
}

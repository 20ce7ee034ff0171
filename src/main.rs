use clap::Parser;
use samjae_reading::utils::{logger, validation::Validate};
use samjae_reading::{CliConfig, GeminiClient, ReadingEngine};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting samjae-reading CLI");
    if config.verbose {
        tracing::debug!("CLI config: name={}, birth_date={}", config.name, config.birth_date);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(2);
    }

    let profile = config.profile();

    // Verdict comes from the pure core, before any network activity.
    let (zodiac, samjae) = ReadingEngine::<GeminiClient>::verdict(&profile);
    println!("당신의 띠는 '{}띠' 입니다.", zodiac);
    if samjae.is_samjae {
        println!(
            "⚠️ {}님, 2026년은 {}띠의 {}입니다.",
            profile.name, zodiac, samjae.status
        );
        println!(
            "   (삼재 기간: {} 중 {}) 각별한 주의가 필요합니다.",
            samjae.period, samjae.year_th
        );
    } else {
        println!(
            "✅ {}님, 2026년은 삼재가 아닙니다. 편안한 한 해가 될 것입니다.",
            profile.name
        );
    }

    let api_key = config.resolved_api_key().unwrap_or_default();
    let client = GeminiClient::new(config.api_base.clone(), config.model.clone(), api_key);
    let engine = ReadingEngine::new(client);

    println!("액운을 막고 복을 부르는 비법을 찾는 중... 🏮");

    match engine.run(&profile).await {
        Ok(reading) => {
            tracing::info!("✅ Reading completed successfully");
            println!("---");
            println!("### 📜 {}님을 위한 처방문", profile.name);
            println!("{}", reading.text);
        }
        Err(e) => {
            tracing::error!("❌ Reading request failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e {
                samjae_reading::ReadingError::ValidationError { .. } => 2,
                samjae_reading::ReadingError::AuthError { .. } => 3,
                _ => 1,
            };
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

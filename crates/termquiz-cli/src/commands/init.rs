//! The `termquiz init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create termquiz.toml
    if std::path::Path::new("termquiz.toml").exists() {
        println!("termquiz.toml already exists, skipping.");
    } else {
        std::fs::write("termquiz.toml", SAMPLE_CONFIG)?;
        println!("Created termquiz.toml");
    }

    // Create example deck
    std::fs::create_dir_all("decks")?;
    let example_path = std::path::Path::new("decks/example.toml");
    if example_path.exists() {
        println!("decks/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_DECK)?;
        println!("Created decks/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Add terms: termquiz add-terms --deck decks/example.toml --input terms.txt");
    println!("  2. Run: termquiz validate --deck decks");
    println!("  3. Study: termquiz learn --deck decks/example.toml --info 0");
    println!("  4. Run: termquiz quiz --deck decks");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# termquiz configuration

default_question_count = 10
history_path = "./termquiz-history.json"
deck_dir = "./decks"
# default_hub = "finance"
# seed = 42
"#;

const EXAMPLE_DECK: &str = r#"id = "finance-example"
hub = "finance"
date = "2025-01-20"

[[infos]]
title = "주식 기초"
content = "주식은 기업의 소유권을 나누어 가진 증권이며, 기업은 이익의 일부를 배당으로 돌려준다."

[[infos.terms]]
term = "주식"
description = "기업의 소유권을 나타내는 증권"

[[infos.terms]]
term = "배당"
description = "이익의 일부를 지급"

[[infos]]
title = "가치 지표"
content = "주가를 이익이나 순자산과 비교해 기업 가치를 가늠한다."

[[infos.terms]]
term = "PER"
description = "주가수익비율"

[[infos.terms]]
term = "PBR"
description = "주가순자산비율"
"#;

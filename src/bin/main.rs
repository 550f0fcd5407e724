use sign_core::core::types::AssetKind;
use sign_core::feedback::FeedbackStore;
use sign_core::{CatalogPaths, MediaCatalog, TargetSystem, TranslationEngine};
use std::io::{stdin, stdout, Write};
use std::path::PathBuf;

const FEEDBACK_FILE: &str = "feedback/feedback_data.json";

fn main() {
    let root = std::env::args().nth(1).map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));

    let catalog = MediaCatalog::scan(&CatalogPaths::from_root(&root));
    let feedback = FeedbackStore::new(root.join(FEEDBACK_FILE));
    let engine = TranslationEngine::new(catalog);
    let mut target = TargetSystem::Asl;

    println!("Sahayak text-to-sign console. Asset root: {}", root.display());
    println!("Type text to translate. ':lang <asl|isl|hindi|telugu|gujarati>',");
    println!("':status', ':feedback <original> => <correction>', 'exit'.");
    println!("---------------------------------------------------------------");
    print_status(&engine);

    loop {
        print!("\n[{}] > ", target);
        stdout().flush().unwrap();

        let mut input = String::new();
        if stdin().read_line(&mut input).unwrap() == 0 {
            break;
        }
        let line = input.trim();

        match line {
            "exit" => break,
            "" => continue,
            ":status" => print_status(&engine),
            s if s.starts_with(":lang") => {
                match s[5..].trim().parse::<TargetSystem>() {
                    Ok(t) => {
                        target = t;
                        println!("Target set to {}", target);
                    }
                    Err(e) => eprintln!("[ERROR] {}", e),
                }
            }
            s if s.starts_with(":feedback") => {
                let rest = s[9..].trim();
                match rest.split_once("=>") {
                    Some((original, correction)) => {
                        match feedback.record(original.trim(), correction.trim()) {
                            Ok(()) => println!("Feedback recorded."),
                            Err(e) => eprintln!("[ERROR] Could not save feedback: {}", e),
                        }
                    }
                    None => eprintln!("[ERROR] Usage: :feedback <original> => <correction>"),
                }
            }
            text => match engine.translate(text, target) {
                Ok(assets) => {
                    println!("{} asset(s):", assets.len());
                    for asset in &assets {
                        let tag = match asset.kind {
                            AssetKind::Video => "video",
                            AssetKind::Image => "image",
                        };
                        println!("  [{}] {}", tag, asset.path);
                    }
                }
                Err(e) => eprintln!("[ERROR] {}", e),
            },
        }
    }
}

fn print_status(engine: &TranslationEngine) {
    let status = engine.catalog().status();
    println!("Catalog status:");
    println!("  word videos : {}", status.videos);
    println!("  ASL letters : {}", status.asl_images);
    println!("  ISL letters : {}", status.isl_images);
}

use std::env;

use vttparser::{read_local_subtitle, Alignment, LoadOutcome, SubtitleFormat, WebVtt};

fn main() {
    println!("🔍 WebVTT Inspector - Cue Structure Analysis");
    println!("============================================");

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        println!("Usage: vtt_inspect <file.vtt> [--normalize]");
        println!("Example: vtt_inspect tests/testdata/sample.vtt --normalize");
        return;
    }
    let file_path = &args[1];
    let normalize = args.iter().skip(2).any(|arg| arg == "--normalize");

    match inspect(file_path, normalize) {
        Ok(_) => println!("\n✅ Inspection completed successfully"),
        Err(e) => println!("\n❌ Inspection failed: {}", e),
    }
}

fn inspect(path: &str, normalize: bool) -> Result<(), Box<dyn std::error::Error>> {
    let report = read_local_subtitle(path)?;
    let handler = WebVtt::new();

    println!("📄 File: {}", path);
    println!("⚠️  Dropped cues: {}", report.error_count);

    let subtitle = match &report.outcome {
        LoadOutcome::Accepted(subtitle) => subtitle,
        LoadOutcome::DeferToVariant { partial, reason } => {
            println!("↪️  Deferred to another handler: {:?}", reason);
            println!("   {} cues were read before deferring", partial.len());
            return Ok(());
        }
    };

    println!(
        "📋 Header: {}",
        subtitle.header.as_deref().unwrap_or("(none)")
    );
    println!("🎬 Cues: {}", subtitle.len());

    let voices = handler.voices(subtitle);
    if !voices.is_empty() {
        println!("🗣️  Voices: {}", voices.join(", "));
    }

    for cue in &subtitle.cues {
        let placement = Alignment::from_text_prefix(&cue.text)
            .map(|alignment| format!(" [{:?}]", alignment))
            .unwrap_or_default();
        let first_line = cue.text.lines().next().unwrap_or("");
        println!(
            "  #{} {} --> {}{} {:?}",
            cue.number, cue.start_time, cue.end_time, placement, first_line
        );
    }

    if normalize {
        println!();
        println!("{}", handler.to_text(subtitle));
    }

    Ok(())
}

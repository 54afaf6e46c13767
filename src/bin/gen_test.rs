//! Synthetic export generator for stress testing tgsift.
//!
//! Usage: cargo run --features gen-test --bin gen_test -- [chats] [messages-per-chat] [output] [layout]
//! Example: cargo run --features gen-test --bin gen_test -- 50 2000 heavy_export.json damaged
//!
//! Layouts:
//! - `wrapped` - full account export with a `chats.list` wrapper
//! - `concat`  - single-chat exports glued together
//! - `damaged` - wrapped, with a garbage fragment spliced in and the tail cut mid-object

use rand::Rng;
use rand::seq::SliceRandom;
use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};

const EMOJIS: &[&str] = &[
    "😀", "😂", "🤔", "🔥", "👍", "❤️", "💀", "🤖", "🇰🇿", "👨‍👩‍👧‍👦", "🤷‍♀️",
];

/// (name, numeric id) pairs; the first one is the "owner" of the export.
const SENDERS: &[(&str, u64)] = &[
    ("Kirill", 305696040),
    ("Alice", 1001),
    ("Bob", 1002),
    ("Татьяна", 1003),
    ("Мария\u{00A0}Иванова", 1004),
    ("村上", 1005),
    ("User \"Quoted\"", 1006),
    ("🔥FireUser🔥", 1007),
];

const CHAT_NAMES: &[&str] = &[
    "Project Alpha",
    "42 ИП Куратор",
    "Family",
    "Book club",
    "Рабочий чат",
    "Weekend {plans}",
];

#[derive(Clone, Copy, PartialEq, Eq)]
enum Layout {
    Wrapped,
    Concat,
    Damaged,
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let chats: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(20);
    let per_chat: usize = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(5_000);
    let output = args.get(3).map(|s| s.as_str()).unwrap_or("heavy_export.json");
    let layout_name = args.get(4).map(|s| s.as_str()).unwrap_or("wrapped");

    let layout = match layout_name {
        "wrapped" => Layout::Wrapped,
        "concat" => Layout::Concat,
        "damaged" => Layout::Damaged,
        _ => {
            eprintln!("Unknown layout: {}. Use 'wrapped', 'concat' or 'damaged'", layout_name);
            std::process::exit(1);
        }
    };

    println!("🧪 Export Generator");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("   Chats:    {}", chats);
    println!("   Messages: {} per chat", per_chat);
    println!("   Output:   {}", output);
    println!("   Layout:   {}", layout_name);
    println!();

    let start = std::time::Instant::now();
    let bytes_written = generate(chats, per_chat, output, layout).expect("Failed to write export");
    let elapsed = start.elapsed();

    println!("\n✅ Done!");
    println!("   Size: {:.2} MB", bytes_written as f64 / 1_000_000.0);
    println!("   Time: {:.2}s", elapsed.as_secs_f64());
}

fn generate(chats: usize, per_chat: usize, output: &str, layout: Layout) -> std::io::Result<usize> {
    let file = File::create(output)?;
    let mut writer = BufWriter::with_capacity(1024 * 1024, file); // 1MB buffer
    let mut rng = rand::thread_rng();
    let mut bytes_written = 0;

    let mut emit = |writer: &mut BufWriter<File>, text: &str| -> std::io::Result<()> {
        bytes_written += text.len();
        writer.write_all(text.as_bytes())
    };

    if layout != Layout::Concat {
        emit(
            &mut writer,
            "{\n \"about\": \"Synthetic export\",\n \"personal_information\": {\"user_id\": 305696040, \"first_name\": \"Kirill\"},\n \"chats\": {\n  \"about\": \"chat list\",\n  \"list\": [\n",
        )?;
    }

    for chat in 0..chats {
        let body = generate_chat(&mut rng, chat, per_chat);
        let last = chat + 1 == chats;

        match layout {
            Layout::Concat => {
                emit(&mut writer, &body)?;
                emit(&mut writer, "\n")?;
            }
            Layout::Wrapped => {
                emit(&mut writer, &body)?;
                emit(&mut writer, if last { "\n" } else { ",\n" })?;
            }
            Layout::Damaged if last => {
                // Cut the final chat off somewhere in its second half.
                let mut cut = body.len() / 2 + rng.gen_range(0..body.len() / 2 + 1);
                while !body.is_char_boundary(cut) {
                    cut -= 1;
                }
                emit(&mut writer, &body[..cut])?;
            }
            Layout::Damaged => {
                emit(&mut writer, &body)?;
                emit(&mut writer, ",\n")?;
                if chat % 3 == 1 {
                    emit(&mut writer, &generate_garbage(&mut rng))?;
                }
            }
        }

        eprint!("\r   Generated {}/{} chats", chat + 1, chats);
    }

    if layout == Layout::Wrapped {
        emit(&mut writer, "  ]\n }\n}\n")?;
    }

    writer.flush()?;
    Ok(bytes_written)
}

fn generate_chat(rng: &mut impl Rng, chat: usize, count: usize) -> String {
    let name = CHAT_NAMES[chat % CHAT_NAMES.len()];
    let chat_id = 1_800_000_000 + chat as u64;

    let mut out = format!(
        "{{\"name\": \"{} #{}\", \"type\": \"private_group\", \"id\": {}, \"messages\": [\n",
        escape_json(name),
        chat,
        chat_id
    );

    for i in 0..count {
        let id = i + 1;
        let (sender, sender_id) = *SENDERS.choose(rng).unwrap();
        let date = format!(
            "2024-{:02}-{:02}T{:02}:{:02}:{:02}",
            (i / 2000) % 12 + 1,
            (i / 80) % 28 + 1,
            (i / 60) % 24,
            i % 60,
            (i * 7) % 60
        );

        let mut fields = format!(
            "\"id\": {}, \"type\": \"message\", \"date\": \"{}\", \"from\": \"{}\", \"from_id\": \"user{}\", \"text\": {}",
            id,
            date,
            escape_json(sender),
            sender_id,
            generate_text(rng, i)
        );

        // Replies, some pointing at ids that were never exported
        if i > 0 && rng.gen_bool(0.3) {
            let target = if rng.gen_bool(0.9) {
                rng.gen_range(1..=i)
            } else {
                count + rng.gen_range(1..1000)
            };
            fields.push_str(&format!(", \"reply_to_message_id\": {}", target));
        }

        let comma = if i + 1 < count { "," } else { "" };
        if i % 50 == 49 {
            // Service entries share the id space but never produce rows
            out.push_str(&format!(
                "  {{\"id\": {}, \"type\": \"service\", \"date\": \"{}\", \"actor\": \"{}\", \"action\": \"pin_message\"}}{}\n",
                id,
                date,
                escape_json(sender),
                comma
            ));
            continue;
        }

        out.push_str(&format!("  {{{}}}{}\n", fields, comma));
    }

    out.push_str("]}");
    out
}

/// Returns a JSON value for the `text` field: a plain string or a mixed array.
fn generate_text(rng: &mut impl Rng, index: usize) -> String {
    match index % 10 {
        0..=3 => format!("\"Normal message #{}\"", index),
        4 => format!("\"Braces {{ and }} inside a string #{}\"", index),
        5 => format!("\"Quotes \\\"here\\\" and \\\\ backslash #{}\"", index),
        6 => format!(
            "[\"see \", {{\"type\": \"link\", \"text\": \"https://example.com/{}\"}}, \" now\"]",
            index
        ),
        7 => {
            let emojis: String = (0..10).map(|_| *EMOJIS.choose(rng).unwrap()).collect();
            format!("\"{} #{}\"", emojis, index)
        }
        8 => format!("\"Кириллица: Привет мир!\\nвторая строка #{}\"", index),
        _ => "\"\"".to_string(),
    }
}

fn generate_garbage(rng: &mut impl Rng) -> String {
    match rng.gen_range(0..4) {
        0 => "{\"name\": GARBAGE, \"messages\": [}\n".to_string(),
        1 => "\u{00A0}\u{202F},,,\n".to_string(),
        2 => "☠️ stray text between chats ☠️\n".to_string(),
        _ => "{\"broken\": tru, \"id\": }\n".to_string(),
    }
}

fn escape_json(s: &str) -> String {
    let mut result = String::with_capacity(s.len() * 2);
    for c in s.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            c if c.is_control() => {
                result.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => result.push(c),
        }
    }
    result
}

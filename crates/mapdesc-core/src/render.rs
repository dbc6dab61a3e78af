//! BBCode output formatting.

use crate::beatmap::User;
use crate::error::Result;
use crate::tier::Tier;

/// Base URL for user profile links.
pub const PROFILE_URL: &str = "https://osu.ppy.sh/u";

/// Format one difficulty line: tier icon, colored original name, and an
/// attributed mapper profile link.
pub fn format_entry(name: &str, tier: Tier, mapper_name: &str, mapper_id: u32) -> Result<String> {
    let style = tier.style()?;

    Ok(format!(
        "[img]{}[/img] [color={}] {}[/color] - by [url={}/{}]{}[/url]",
        style.icon_url, style.color, name, PROFILE_URL, mapper_id, mapper_name
    ))
}

/// Assemble the full description block from already-sorted entry lines.
///
/// The hitsounds attribution is separated from the entries by a blank line.
pub fn assemble_block(entries: Vec<String>, hitsounder: &User) -> String {
    let mut lines = entries;
    lines.push(format!(
        "\nHitsounds by [url={}/{}]{}[/url]",
        PROFILE_URL, hitsounder.id, hitsounder.username
    ));

    format!("[centre][size=150]\n{}\n[/size][/centre]", lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_entry() {
        let entry = format_entry("Sunrise", Tier::Easy, "alice", 42).unwrap();
        let style = Tier::Easy.style().unwrap();

        assert_eq!(
            entry,
            format!(
                "[img]{}[/img] [color=#8cccec] Sunrise[/color] - by [url=https://osu.ppy.sh/u/42]alice[/url]",
                style.icon_url
            )
        );
    }

    #[test]
    fn test_format_entry_keeps_inputs_verbatim() {
        let entry = format_entry("[Nevo's Expert]", Tier::Expert, "Nevo", 7451883).unwrap();
        assert!(entry.contains("[Nevo's Expert]"));
        assert!(entry.contains("https://osu.ppy.sh/u/7451883"));
        assert!(entry.contains("]Nevo[/url]"));
    }

    #[test]
    fn test_assemble_block() {
        let hitsounder = User {
            id: 7,
            username: "hs".to_string(),
        };
        let block = assemble_block(vec!["first".to_string(), "second".to_string()], &hitsounder);

        assert_eq!(
            block,
            "[centre][size=150]\n\
             first\n\
             second\n\
             \n\
             Hitsounds by [url=https://osu.ppy.sh/u/7]hs[/url]\n\
             [/size][/centre]"
        );
    }
}

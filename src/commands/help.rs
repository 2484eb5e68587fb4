use crate::views::Palette;

const SECTIONS: [(&str, &[(&str, &str)]); 4] = [
    (
        "🧭 Navigation",
        &[
            ("tab <overview|transactions|alerts>", "Switch tab (aliases: o, tx, a)"),
            ("range <today|24h|7d|30d>", "Change the time range"),
            ("search [text]", "Filter rows; no text clears the search"),
        ],
    ),
    (
        "🔎 Transaction filters",
        &[
            ("status <ok|error|all>", "Filter by status"),
            ("channel <name|all>", "Filter by channel"),
            ("amount <min|-> [max|-]", "Filter by amount bounds"),
            ("reset-filters", "Clear the structured filters"),
        ],
    ),
    (
        "🚨 Alerts",
        &[
            ("alerts <all|unread|critical>", "Filter the alert list"),
            ("read-all", "Mark every unread alert as read"),
        ],
    ),
    (
        "🎨 Page",
        &[
            ("theme [light|dark]", "Set the theme, or toggle without an argument"),
            ("os <light|dark>", "Simulate an OS color-scheme change"),
            ("chart <path>", "Write the throughput chart as SVG"),
            ("export <path>", "Write the visible rows as JSON"),
            ("url", "Show the current page address"),
            ("help", "Show this help message"),
            ("quit", "Leave the dashboard"),
        ],
    ),
];

/// The command reference shown by `help`
pub fn help_text(palette: &Palette) -> String {
    let width = SECTIONS
        .iter()
        .flat_map(|(_, commands)| commands.iter())
        .map(|(usage, _)| usage.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (title, commands) in SECTIONS.iter() {
        out.push_str(&palette.paint(palette.bold, title));
        out.push('\n');
        for (usage, summary) in commands.iter() {
            out.push_str(&format!("  {:<width$}  {}\n", usage, summary, width = width));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_lists_every_command() {
        let text = help_text(&Palette::PLAIN);
        let commands = [
            "tab", "range", "search", "status", "channel", "amount", "reset-filters", "alerts",
            "read-all", "theme", "os", "chart", "export", "url", "help", "quit",
        ];
        for command in commands {
            assert!(
                text.lines().any(|l| l.trim_start().starts_with(command)),
                "missing {}",
                command
            );
        }
    }

    #[test]
    fn test_help_sections() {
        let text = help_text(&Palette::PLAIN);
        assert!(text.starts_with("🧭 Navigation\n"));
        assert_eq!(text.lines().filter(|l| !l.starts_with(' ')).count(), 4);
    }
}

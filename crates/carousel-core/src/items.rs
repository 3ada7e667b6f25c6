use std::path::Path;

use serde::{Deserialize, Serialize};

/// A single carousel card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Image reference shown at the top of the card
    #[serde(default)]
    pub image: String,
    /// Body text
    pub text: String,
}

#[derive(Deserialize)]
struct ItemsFile {
    items: Vec<Item>,
}

/// Load items from a `.json` array or a `.toml` file with an `[[items]]` table
pub fn load_items(path: &Path) -> crate::Result<Vec<Item>> {
    let content = std::fs::read_to_string(path)?;
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("json") => Ok(serde_json::from_str(&content)?),
        Some("toml") => Ok(toml::from_str::<ItemsFile>(&content)?.items),
        _ => Err(crate::Error::Config(format!(
            "unsupported items file '{}', expected .json or .toml",
            path.display()
        ))),
    }
}

const LOREM: &[&str] = &[
    "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Integer posuere erat a ante venenatis dapibus.",
    "Curabitur blandit tempus porttitor. Donec ullamcorper nulla non metus auctor fringilla, vestibulum id ligula porta.",
    "Maecenas faucibus mollis interdum. Nullam quis risus eget urna mollis ornare vel eu leo.",
    "Aenean lacinia bibendum nulla sed consectetur. Cras mattis consectetur purus sit amet fermentum.",
    "Etiam porta sem malesuada magna mollis euismod. Vivamus sagittis lacus vel augue laoreet rutrum.",
    "Praesent commodo cursus magna, vel scelerisque nisl consectetur et. Sed posuere consectetur est at lobortis.",
];

/// Deterministic placeholder cards
pub fn demo_items(count: usize) -> Vec<Item> {
    (0..count)
        .map(|i| Item {
            image: format!("https://avatars.githubusercontent.com/u/{}", 1000 + i * 37),
            text: LOREM[i % LOREM.len()].to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_items() {
        let items = demo_items(8);
        assert_eq!(items.len(), 8);
        assert_eq!(items[0].text, items[6].text);
        assert_ne!(items[0].image, items[6].image);
        assert!(demo_items(0).is_empty());
    }

    #[test]
    fn test_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("items.json");
        std::fs::write(
            &path,
            r#"[{"image": "a.png", "text": "first"}, {"text": "second"}]"#,
        )
        .unwrap();

        let items = load_items(&path).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].image, "");
        assert_eq!(items[1].text, "second");
    }

    #[test]
    fn test_load_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("items.TOML");
        std::fs::write(
            &path,
            "[[items]]\nimage = \"a.png\"\ntext = \"one\"\n\n[[items]]\ntext = \"two\"\n",
        )
        .unwrap();

        let items = load_items(&path).unwrap();
        assert_eq!(items.iter().map(|i| i.text.as_str()).collect::<Vec<_>>(), ["one", "two"]);
    }

    #[test]
    fn test_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("items.yaml");
        std::fs::write(&path, "- text: x").unwrap();
        assert!(matches!(load_items(&path), Err(crate::Error::Config(_))));
    }
}

//! Optional portrait images, looked up by entity name

use super::{Category, Entity};
use std::path::{Path, PathBuf};

/// Sub-folder of the portraits directory holding one category's images
pub fn portrait_folder(category: Category) -> &'static str {
    match category {
        Category::Suspect => "characters",
        Category::Location => "locations",
        Category::Weapon => "weapons",
    }
}

/// Where the portrait of `entity` would live under `root`
pub fn portrait_path(root: &Path, entity: Entity) -> PathBuf {
    root.join(portrait_folder(entity.category()))
        .join(format!("{}.png", entity.name()))
}

/// The portrait of `entity` if it exists on disk. A missing image is not an error.
pub fn find_portrait(root: &Path, entity: Entity) -> Option<PathBuf> {
    let path = portrait_path(root, entity);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Location, Suspect};

    #[test]
    fn portraits_are_keyed_by_display_name() {
        let path = portrait_path(Path::new("images"), Entity::Suspect(Suspect::PeterParker));
        assert_eq!(path, Path::new("images").join("characters").join("Peter Parker.png"));
    }

    #[test]
    fn missing_portrait_falls_back_to_none() {
        let dir = tempfile::tempdir().unwrap();
        let wakanda = Entity::Location(Location::Wakanda);
        assert_eq!(find_portrait(dir.path(), wakanda), None);

        std::fs::create_dir_all(dir.path().join("locations")).unwrap();
        std::fs::write(dir.path().join("locations").join("Wakanda.png"), b"png").unwrap();
        assert_eq!(
            find_portrait(dir.path(), wakanda),
            Some(dir.path().join("locations").join("Wakanda.png"))
        );
    }
}

/// The editing project a viewer previews.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    name: String,
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn viewer_title(&self) -> String {
        format!("{} - Viewer", self.name)
    }
}

impl Default for Project {
    fn default() -> Self {
        Self::new("Untitled")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_contains_project_name() {
        assert_eq!(Project::new("holidays").viewer_title(), "holidays - Viewer");
        assert_eq!(Project::default().name(), "Untitled");
    }
}

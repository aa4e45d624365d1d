/// Page types of the site, one JSON document each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageType {
    Activities,
    Museums,
    Sightseeing,
    Workspots,
}

/// Shape of the rendered collection for a page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// `<article class="card">` items inside `.cards`
    Cards,
    /// `<tr data-status>` items inside `.work-table tbody`
    Rows,
}

impl Layout {
    /// Selector of the element that receives the rendered fragments
    pub fn container_selector(&self) -> &'static str {
        match self {
            Layout::Cards => ".cards",
            Layout::Rows => ".work-table tbody",
        }
    }
}

impl PageType {
    /// Code used in `data-page-type` and the data file name
    pub fn code(&self) -> &'static str {
        match self {
            PageType::Activities => "activities",
            PageType::Museums => "museums",
            PageType::Sightseeing => "sightseeing",
            PageType::Workspots => "workspots",
        }
    }

    pub fn layout(&self) -> Layout {
        match self {
            PageType::Workspots => Layout::Rows,
            _ => Layout::Cards,
        }
    }

    /// Relative path of the JSON document, e.g. `data/museums.json`
    pub fn data_path(&self, data_dir: &str) -> String {
        let dir = data_dir.trim_end_matches('/');
        if dir.is_empty() {
            format!("{}.json", self.code())
        } else {
            format!("{}/{}.json", dir, self.code())
        }
    }

    /// Exact match on the code; anything else is unknown
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "activities" => Some(PageType::Activities),
            "museums" => Some(PageType::Museums),
            "sightseeing" => Some(PageType::Sightseeing),
            "workspots" => Some(PageType::Workspots),
            _ => None,
        }
    }
}

impl std::fmt::Display for PageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for page in [
            PageType::Activities,
            PageType::Museums,
            PageType::Sightseeing,
            PageType::Workspots,
        ] {
            assert_eq!(PageType::from_code(page.code()), Some(page));
        }
        assert_eq!(PageType::from_code("restaurants"), None);
        assert_eq!(PageType::from_code("Museums"), None);
        assert_eq!(PageType::from_code(" museums "), None);
    }

    #[test]
    fn test_layout_and_container() {
        assert_eq!(PageType::Museums.layout(), Layout::Cards);
        assert_eq!(PageType::Workspots.layout(), Layout::Rows);
        assert_eq!(
            PageType::Workspots.layout().container_selector(),
            ".work-table tbody"
        );
        assert_eq!(PageType::Activities.layout().container_selector(), ".cards");
    }

    #[test]
    fn test_data_path() {
        assert_eq!(PageType::Activities.data_path("data"), "data/activities.json");
        assert_eq!(PageType::Workspots.data_path("data/"), "data/workspots.json");
        assert_eq!(PageType::Sightseeing.data_path(""), "sightseeing.json");
    }
}

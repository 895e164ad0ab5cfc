//! Turns an instance list into what the list panel draws

use super::instance::{Instance, InstanceAction};

/// Shown in place of rows when the server has no instances
pub const EMPTY_PLACEHOLDER: &str = "No instances found, try 'REFRESH' or 'CREATE'";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    Placeholder(&'static str),
    Rows(Vec<InstanceRow>),
}

/// One displayed instance and the buttons it offers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceRow {
    pub name: String,
    pub status: String,
    pub kind: Option<String>,
    pub actions: Vec<InstanceAction>,
}

impl InstanceRow {
    pub fn label(&self) -> String {
        format!("{} - {}", self.name, self.status)
    }
}

/// A click on a row button, keyed by instance name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowClick {
    pub name: String,
    pub action: InstanceAction,
}

/// Buttons for an instance, decided by its status alone
pub fn row_actions(instance: &Instance) -> Vec<InstanceAction> {
    let power = if instance.is_running() {
        InstanceAction::Stop
    } else {
        InstanceAction::Start
    };
    vec![InstanceAction::Delete, power]
}

/// Rebuild the displayed set from scratch. `read_only` drops every action.
pub fn render(instances: &[Instance], read_only: bool) -> ListView {
    if instances.is_empty() {
        return ListView::Placeholder(EMPTY_PLACEHOLDER);
    }

    ListView::Rows(
        instances
            .iter()
            .map(|instance| InstanceRow {
                name: instance.name.clone(),
                status: instance.status.clone(),
                kind: instance.kind.clone(),
                actions: if read_only {
                    Vec::new()
                } else {
                    row_actions(instance)
                },
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(view: ListView) -> Vec<InstanceRow> {
        match view {
            ListView::Rows(rows) => rows,
            ListView::Placeholder(text) => panic!("expected rows, got placeholder {:?}", text),
        }
    }

    #[test]
    fn empty_list_renders_placeholder() {
        assert_eq!(render(&[], false), ListView::Placeholder(EMPTY_PLACEHOLDER));
        assert_eq!(render(&[], true), ListView::Placeholder(EMPTY_PLACEHOLDER));
    }

    #[test]
    fn one_row_per_instance_in_server_order() {
        let instances = vec![
            Instance::new("web1", "Running"),
            Instance::new("db1", "Stopped"),
            Instance::new("cache", "Frozen"),
        ];
        let rows = rows(render(&instances, false));
        assert_eq!(rows.len(), 3);
        for (row, instance) in rows.iter().zip(&instances) {
            assert_eq!(row.name, instance.name);
            assert_eq!(row.status, instance.status);
            assert!(row.label().contains(&instance.name));
            assert!(row.label().contains(&instance.status));
        }
    }

    #[test]
    fn running_instance_offers_stop_and_delete() {
        let rows = rows(render(&[Instance::new("web1", "Running")], false));
        assert_eq!(rows[0].label(), "web1 - Running");
        assert!(rows[0].actions.contains(&InstanceAction::Stop));
        assert!(rows[0].actions.contains(&InstanceAction::Delete));
        assert!(!rows[0].actions.contains(&InstanceAction::Start));
    }

    #[test]
    fn any_other_status_offers_start_and_delete() {
        for status in ["Stopped", "Frozen", "Error", "", "running"] {
            let actions = row_actions(&Instance::new("web1", status));
            assert!(actions.contains(&InstanceAction::Start), "{}", status);
            assert!(actions.contains(&InstanceAction::Delete), "{}", status);
            assert!(!actions.contains(&InstanceAction::Stop), "{}", status);
        }
    }

    #[test]
    fn read_only_rows_have_no_actions() {
        let rows = rows(render(&[Instance::new("web1", "Running")], true));
        assert_eq!(rows[0].label(), "web1 - Running");
        assert!(rows[0].actions.is_empty());
    }
}

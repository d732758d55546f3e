//! Link components: anchors to role, environment, job and task pages.
//!
//! Missing role or environment segments are left empty, producing a
//! malformed but harmless URL instead of an error. Values are not escaped for
//! URLs; callers pass pre-sanitized identifiers.

use console_core::{Element, LinkTarget};

use crate::config::LinkSettings;
use crate::registry::ComponentId;

/// Which page a link points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkVariant {
    /// `{root}/{value}`
    Role,
    /// `{root}/{role}/{value}`
    RoleEnv,
    /// `{root}/{role}/{environment}/{value}`
    Job,
    /// `{task_root}/{value}`, opened in the current frame
    Task,
}

impl LinkVariant {
    pub fn component(self) -> ComponentId {
        match self {
            LinkVariant::Role => ComponentId::RoleLink,
            LinkVariant::RoleEnv => ComponentId::RoleEnvLink,
            LinkVariant::Job => ComponentId::JobLink,
            LinkVariant::Task => ComponentId::TaskLink,
        }
    }

    pub fn from_component(id: ComponentId) -> Option<Self> {
        match id {
            ComponentId::RoleLink => Some(LinkVariant::Role),
            ComponentId::RoleEnvLink => Some(LinkVariant::RoleEnv),
            ComponentId::JobLink => Some(LinkVariant::Job),
            ComponentId::TaskLink => Some(LinkVariant::Task),
            _ => None,
        }
    }
}

/// Formats [`LinkTarget`]s into anchors
#[derive(Debug, Clone, Default)]
pub struct LinkFormatter {
    settings: LinkSettings,
}

impl LinkFormatter {
    pub fn new(settings: LinkSettings) -> Self {
        Self { settings }
    }

    /// Destination path for `target`
    pub fn href(&self, variant: LinkVariant, target: &LinkTarget) -> String {
        let role = target.role.as_deref().unwrap_or_default();
        let environment = target.environment.as_deref().unwrap_or_default();
        let value = target.value.as_str();

        match variant {
            LinkVariant::Role => join(&self.settings.scheduler_root, &[value]),
            LinkVariant::RoleEnv => join(&self.settings.scheduler_root, &[role, value]),
            LinkVariant::Job => join(&self.settings.scheduler_root, &[role, environment, value]),
            LinkVariant::Task => join(&self.settings.task_root, &[value]),
        }
    }

    /// Anchor element whose text is the formatted value
    pub fn render(&self, variant: LinkVariant, target: &LinkTarget) -> Element {
        let anchor = Element::new("a");
        let anchor = match variant {
            LinkVariant::Task => anchor.class("col-md-8"),
            _ => anchor,
        };
        let anchor = anchor.attr("href", self.href(variant, target));
        let anchor = match variant {
            LinkVariant::Task => anchor.attr("target", "_self"),
            _ => anchor,
        };
        anchor.text(target.value.clone())
    }

    pub fn role_link(&self, target: &LinkTarget) -> Element {
        self.render(LinkVariant::Role, target)
    }

    pub fn role_env_link(&self, target: &LinkTarget) -> Element {
        self.render(LinkVariant::RoleEnv, target)
    }

    pub fn job_link(&self, target: &LinkTarget) -> Element {
        self.render(LinkVariant::Job, target)
    }

    pub fn task_link(&self, target: &LinkTarget) -> Element {
        self.render(LinkVariant::Task, target)
    }
}

fn join(root: &str, segments: &[&str]) -> String {
    let mut path = root.trim_end_matches('/').to_string();
    for segment in segments {
        path.push('/');
        path.push_str(segment);
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use console_core::Markup;

    fn job_a() -> LinkTarget {
        LinkTarget::new("jobA").with_role("r1").with_environment("e1")
    }

    #[test]
    fn test_link_variants() {
        let links = LinkFormatter::default();
        let target = job_a();

        assert_eq!(links.href(LinkVariant::Role, &target), "/scheduler/jobA");
        assert_eq!(links.href(LinkVariant::RoleEnv, &target), "/scheduler/r1/jobA");
        assert_eq!(links.href(LinkVariant::Job, &target), "/scheduler/r1/e1/jobA");
        assert_eq!(links.href(LinkVariant::Task, &target), "/structdump/task/jobA");
    }

    #[test]
    fn test_missing_segments_degrade() {
        let links = LinkFormatter::default();
        let target = LinkTarget::new("jobA");

        assert_eq!(links.href(LinkVariant::RoleEnv, &target), "/scheduler//jobA");
        assert_eq!(links.href(LinkVariant::Job, &target), "/scheduler///jobA");
    }

    #[test]
    fn test_custom_root_trailing_slash() {
        let links = LinkFormatter::new(LinkSettings {
            scheduler_root: "/aurora/".to_string(),
            task_root: "/tasks".to_string(),
        });
        assert_eq!(links.href(LinkVariant::Role, &job_a()), "/aurora/jobA");
    }

    #[test]
    fn test_job_link_markup() {
        let markup: Markup = LinkFormatter::default().job_link(&job_a()).into();
        insta::assert_snapshot!(markup.to_html(), @r#"<a href="/scheduler/r1/e1/jobA">jobA</a>"#);
    }

    #[test]
    fn test_task_link_markup() {
        let task = LinkTarget::new("1400000000-www-data-prod-hello-0-abc");
        let markup: Markup = LinkFormatter::default().task_link(&task).into();
        insta::assert_snapshot!(
            markup.to_html(),
            @r#"<a class="col-md-8" href="/structdump/task/1400000000-www-data-prod-hello-0-abc" target="_self">1400000000-www-data-prod-hello-0-abc</a>"#
        );
    }

    #[test]
    fn test_variant_component_mapping() {
        for variant in [
            LinkVariant::Role,
            LinkVariant::RoleEnv,
            LinkVariant::Job,
            LinkVariant::Task,
        ] {
            assert_eq!(LinkVariant::from_component(variant.component()), Some(variant));
        }
        assert_eq!(LinkVariant::from_component(ComponentId::Breadcrumb), None);
    }
}

//! Metadata descriptor generation.
//!
//! Renders the `resource-agent` XML document the cluster manager reads to
//! learn an agent's parameters and actions. The document is built from the
//! agent's registered [`ParameterSet`] and [`ActionTable`]; nothing is
//! discovered at run time.
//!
//! Parameter `required` and `default` reflect the current values, so the
//! descriptor should be generated after configuration has been loaded.

mod xml;


pub use xml::{Element, escape};

use crate::actions::ActionTable;
use crate::agent::{AgentInfo, ResourceAgent};
use crate::params::{Parameter, ParameterSet};

/// System identifier of the OCF resource agent DTD.
pub const RA_API_DTD: &str = "ra-api-1.dtd";

/// Render the descriptor for `agent`.
pub fn generate<A: ResourceAgent>(agent: &A) -> String {
    let core = agent.core();
    let actions = ActionTable::<A>::for_agent();
    render(&descriptor(&core.info, &core.params, &actions))
}

/// Build the descriptor tree.
pub fn descriptor<A>(info: &AgentInfo, params: &ParameterSet, actions: &ActionTable<A>) -> Element {
    let mut root = Element::new("resource-agent")
        .attr("name", &info.name)
        .attr("version", &info.version)
        .child(Element::new("version").text(&info.version));

    push_descriptions(&mut root, &info.shortdesc, &info.longdesc, &info.language);

    if !params.is_empty() {
        let mut parameters = Element::new("parameters");
        for param in params.iter() {
            parameters.push(parameter_element(param, &info.language));
        }
        root.push(parameters);
    }

    let mut action_list = Element::new("actions");
    for action in actions.advertised() {
        let mut el = Element::new("action").attr("name", action.name());
        if let Some(timeout) = action.timeout_secs() {
            el = el.attr("timeout", timeout.to_string());
        }
        if let Some(interval) = action.interval_secs() {
            el = el.attr("interval", interval.to_string());
        }
        action_list.push(el);
    }
    root.push(action_list);

    root
}

/// Serialize a descriptor tree as a standalone document.
pub fn render(root: &Element) -> String {
    let mut out = String::from("<?xml version=\"1.0\"?>\n");
    out.push_str(&format!(
        "<!DOCTYPE resource-agent SYSTEM \"{}\">\n",
        RA_API_DTD
    ));
    root.render_into(&mut out, 0);
    out
}

fn parameter_element(param: &Parameter, language: &str) -> Element {
    let mut el = Element::new("parameter")
        .attr("name", &param.name)
        .attr("unique", flag(param.unique))
        .attr("required", flag(param.required()));

    push_descriptions(&mut el, &param.shortdesc, &param.longdesc, language);

    let mut content = Element::new("content").attr("type", param.kind.as_str());
    if let Some(default) = param.advertised_default() {
        content = content.attr("default", default);
    }
    el.push(content);

    el
}

fn push_descriptions(el: &mut Element, shortdesc: &str, longdesc: &str, language: &str) {
    if !shortdesc.is_empty() {
        el.push(Element::new("shortdesc").attr("lang", language).text(shortdesc));
    }
    if !longdesc.is_empty() {
        el.push(Element::new("longdesc").attr("lang", language).text(longdesc));
    }
}

fn flag(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}

//! Fully-qualified names the default conventions match on.

pub const TAG_HELPER_INTERFACE: &str = "Microsoft.AspNetCore.Razor.TagHelpers.ITagHelper";
pub const HTML_TARGET_ELEMENT: &str =
    "Microsoft.AspNetCore.Razor.TagHelpers.HtmlTargetElementAttribute";
pub const HTML_ATTRIBUTE_NAME: &str =
    "Microsoft.AspNetCore.Razor.TagHelpers.HtmlAttributeNameAttribute";
pub const HTML_ATTRIBUTE_NOT_BOUND: &str =
    "Microsoft.AspNetCore.Razor.TagHelpers.HtmlAttributeNotBoundAttribute";
pub const OUTPUT_ELEMENT_HINT: &str =
    "Microsoft.AspNetCore.Razor.TagHelpers.OutputElementHintAttribute";
pub const EDITOR_BROWSABLE: &str = "System.ComponentModel.EditorBrowsableAttribute";

pub const VIEW_COMPONENT_ATTRIBUTE: &str = "Microsoft.AspNetCore.Mvc.ViewComponentAttribute";
pub const NON_VIEW_COMPONENT_ATTRIBUTE: &str = "Microsoft.AspNetCore.Mvc.NonViewComponentAttribute";

pub const TASK: &str = "System.Threading.Tasks.Task";
pub const VOID: &str = "System.Void";

/// Trailing name segment stripped to form a tag helper's element name.
pub const TAG_HELPER_SUFFIX: &str = "TagHelper";
/// Trailing name segment that marks a view component by convention.
pub const VIEW_COMPONENT_SUFFIX: &str = "ViewComponent";
/// Element prefix for view component tags.
pub const VIEW_COMPONENT_TAG_PREFIX: &str = "vc:";

pub const INVOKE: &str = "Invoke";
pub const INVOKE_ASYNC: &str = "InvokeAsync";

/// Named arguments of `HtmlTargetElement`.
pub mod target_element {
    pub const ATTRIBUTES: &str = "Attributes";
    pub const PARENT_TAG: &str = "ParentTag";
    pub const TAG_STRUCTURE: &str = "TagStructure";
}

/// Element name matching every element.
pub const CATCH_ALL_TAG: &str = "*";

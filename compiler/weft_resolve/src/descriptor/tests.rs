use super::*;
use pretty_assertions::assert_eq;

fn tag_helper() -> TagHelperDescriptor {
    TagHelperDescriptor {
        type_name: "App.BoldTagHelper".to_owned(),
        assembly_name: "app".to_owned(),
        tag_name: "bold".to_owned(),
        required_attributes: SmallVec::new(),
        parent_tag: None,
        tag_structure: TagStructure::Unspecified,
        attributes: vec![BoundAttributeDescriptor {
            name: "weight".to_owned(),
            property_name: "Weight".to_owned(),
            type_name: "int".to_owned(),
            documentation: None,
        }],
        output_element_hint: None,
        documentation: None,
    }
}

fn view_component() -> ViewComponentDescriptor {
    ViewComponentDescriptor {
        type_name: "App.CartViewComponent".to_owned(),
        assembly_name: "app".to_owned(),
        component_name: "Cart".to_owned(),
        tag_name: "vc:cart".to_owned(),
        invoke_method: "Invoke".to_owned(),
        attributes: Vec::new(),
    }
}

#[test]
fn kind_matches_variant() {
    assert_eq!(
        Descriptor::from(tag_helper()).kind(),
        DescriptorKind::ElementBindable
    );
    assert_eq!(
        Descriptor::from(view_component()).kind(),
        DescriptorKind::ViewComponent
    );
}

#[test]
fn shared_accessors() {
    let th = Descriptor::from(tag_helper());
    assert_eq!(th.name(), "App.BoldTagHelper");
    assert_eq!(th.tag_name(), "bold");
    assert_eq!(th.assembly_name(), "app");
    assert_eq!(th.attributes().len(), 1);
    assert!(th.as_tag_helper().is_some());
    assert!(th.as_view_component().is_none());

    let vc = Descriptor::from(view_component());
    assert_eq!(vc.name(), "App.CartViewComponent");
    assert_eq!(vc.tag_name(), "vc:cart");
    assert!(vc.as_view_component().is_some());
}

#[test]
fn display_format() {
    assert_eq!(
        Descriptor::from(view_component()).to_string(),
        "view-component <vc:cart> (App.CartViewComponent)"
    );
    assert_eq!(
        Descriptor::from(tag_helper()).to_string(),
        "element-bindable <bold> (App.BoldTagHelper)"
    );
}

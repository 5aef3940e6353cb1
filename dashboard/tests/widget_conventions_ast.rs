use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use syn::{Item, UseTree, Visibility};

const REQUIRED_WIDGET_FILES: [&str; 7] = [
    "mod.rs",
    "command.rs",
    "event.rs",
    "model.rs",
    "reducer.rs",
    "state.rs",
    "view/mod.rs",
];

#[test]
fn given_widgets_when_validating_conventions_then_all_modules_comply() {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let widgets_dir = manifest_dir.join("src/widgets");
    let mod_rs = widgets_dir.join("mod.rs");

    let mut violations: Vec<String> = Vec::new();

    let mod_file = parse_file(&mod_rs);
    let mut declared_modules = BTreeSet::new();
    for item in &mod_file.items {
        match item {
            Item::Mod(item_mod) => {
                if is_pub_crate(&item_mod.vis) && item_mod.content.is_none() {
                    declared_modules.insert(item_mod.ident.to_string());
                } else {
                    violations.push(format!(
                        "{}: module declaration '{}' must be pub(crate) mod <name>;",
                        mod_rs.display(),
                        item_mod.ident
                    ));
                }
            },
            Item::Use(item_use) if use_tree_has_glob(&item_use.tree) => {
                violations.push(format!(
                    "{}: wildcard use/import is forbidden",
                    mod_rs.display()
                ));
            },
            _ => {},
        }
    }

    let mut fs_modules = BTreeSet::new();
    let entries = fs::read_dir(&widgets_dir).unwrap_or_else(|err| {
        panic!("failed to read dir {}: {err}", widgets_dir.display())
    });
    for entry in entries {
        let entry = entry
            .unwrap_or_else(|err| panic!("failed to read dir entry: {err}"));
        let path = entry.path();
        let file_type = entry.file_type().unwrap_or_else(|err| {
            panic!("failed to read file type for {}: {err}", path.display())
        });

        if file_type.is_dir() {
            fs_modules.insert(entry.file_name().to_string_lossy().to_string());
        } else if path.file_name().is_some_and(|name| name != "mod.rs") {
            violations.push(format!(
                "{}: widgets must live in their own directory",
                path.display()
            ));
        }
    }

    if declared_modules != fs_modules {
        violations.push(format!(
            "{}: declared modules {:?} do not match widget directories {:?}",
            mod_rs.display(),
            declared_modules,
            fs_modules
        ));
    }

    for module in &declared_modules {
        validate_widget_dir(&widgets_dir.join(module), &mut violations);
    }

    assert!(
        violations.is_empty(),
        "widget convention violations:\n{}",
        violations.join("\n")
    );
}

fn validate_widget_dir(widget_dir: &Path, violations: &mut Vec<String>) {
    let prefix = dir_name_pascal_case(widget_dir);

    for file in REQUIRED_WIDGET_FILES {
        let path = widget_dir.join(file);
        if !path.is_file() {
            violations.push(format!("{}: missing widget file", path.display()));
            continue;
        }
        validate_side_effects(&path, violations);
    }

    validate_mod_file(&widget_dir.join("mod.rs"), violations);
    validate_event_file(&widget_dir.join("event.rs"), &prefix, violations);
    validate_view_file(&widget_dir.join("view/mod.rs"), &prefix, violations);
}

fn validate_side_effects(file_path: &Path, violations: &mut Vec<String>) {
    let source = read_source(file_path);
    let production = source.split("#[cfg(test)]").next().unwrap_or_default();

    for forbidden in [
        "crate::app::Event",
        "log::",
        "std::fs::",
        "std::process::Command",
        "Task::",
        "iced::Task",
    ] {
        if production.contains(forbidden) {
            violations.push(format!(
                "{}: forbidden side-effect pattern detected: {forbidden}",
                file_path.display()
            ));
        }
    }
    for forbidden in ["Instant::now", ".elapsed("] {
        if production.contains(forbidden) {
            violations.push(format!(
                "{}: forbidden runtime-time pattern detected: {forbidden}",
                file_path.display()
            ));
        }
    }

    let file = parse_source(file_path, &source);
    for item in &file.items {
        if let Item::Use(item_use) = item {
            if use_tree_has_glob(&item_use.tree) {
                violations.push(format!(
                    "{}: wildcard use/import is forbidden",
                    file_path.display()
                ));
            }
        }
    }
}

fn validate_mod_file(file_path: &Path, violations: &mut Vec<String>) {
    let file = parse_file(file_path);

    for item in &file.items {
        if let Item::Mod(item_mod) = item {
            let name = item_mod.ident.to_string();
            let is_view = name == "view";
            if is_view && !is_pub_crate(&item_mod.vis) {
                violations.push(format!(
                    "{}: view module must be pub(crate)",
                    file_path.display()
                ));
            }
            if !is_view && !matches!(item_mod.vis, Visibility::Inherited) {
                violations.push(format!(
                    "{}: module '{name}' must stay private to the widget",
                    file_path.display()
                ));
            }
        }
    }
}

fn validate_event_file(
    file_path: &Path,
    prefix: &str,
    violations: &mut Vec<String>,
) {
    let file = parse_file(file_path);
    let event_names: Vec<String> = file
        .items
        .iter()
        .filter_map(|item| match item {
            Item::Enum(item_enum) => Some(item_enum.ident.to_string()),
            Item::Type(item_type) => Some(item_type.ident.to_string()),
            _ => None,
        })
        .filter(|name| name.ends_with("Event"))
        .collect();

    if event_names.len() != 1 {
        violations.push(format!(
            "{}: expected exactly one *Event contract, found {}",
            file_path.display(),
            event_names.len()
        ));
    }
    for name in event_names {
        if name.ends_with("WidgetEvent") {
            violations.push(format!(
                "{}: *WidgetEvent suffix is forbidden; use <Widget>Event",
                file_path.display()
            ));
        }
        if !name.starts_with(prefix) {
            violations.push(format!(
                "{}: event contract '{name}' must start with '{prefix}'",
                file_path.display()
            ));
        }
    }
}

fn validate_view_file(
    file_path: &Path,
    prefix: &str,
    violations: &mut Vec<String>,
) {
    let file = parse_file(file_path);
    let mut view_count = 0usize;
    let mut props_names: Vec<String> = Vec::new();

    for item in &file.items {
        match item {
            Item::Fn(item_fn) if item_fn.sig.ident == "view" => {
                if is_pub_crate(&item_fn.vis) {
                    view_count += 1;
                } else {
                    violations.push(format!(
                        "{}: view must be pub(crate)",
                        file_path.display()
                    ));
                }
            },
            Item::Struct(item_struct) => {
                let name = item_struct.ident.to_string();
                if name.ends_with("Props") {
                    props_names.push(name);
                }
            },
            _ => {},
        }
    }

    if view_count != 1 {
        violations.push(format!(
            "{}: expected exactly one pub(crate) fn view, found {view_count}",
            file_path.display()
        ));
    }
    if props_names.len() != 1 {
        violations.push(format!(
            "{}: expected exactly one *Props type, found {}",
            file_path.display(),
            props_names.len()
        ));
    }
    for name in props_names {
        if name.ends_with("WidgetProps") {
            violations.push(format!(
                "{}: *WidgetProps suffix is forbidden; use <Widget>Props",
                file_path.display()
            ));
        }
        if !name.starts_with(prefix) {
            violations.push(format!(
                "{}: props type '{name}' must start with '{prefix}'",
                file_path.display()
            ));
        }
    }
}

fn read_source(file_path: &Path) -> String {
    fs::read_to_string(file_path).unwrap_or_else(|err| {
        panic!("failed to read {}: {err}", file_path.display())
    })
}

fn parse_source(file_path: &Path, source: &str) -> syn::File {
    syn::parse_file(source).unwrap_or_else(|err| {
        panic!("failed to parse {}: {err}", file_path.display())
    })
}

fn parse_file(file_path: &Path) -> syn::File {
    parse_source(file_path, &read_source(file_path))
}

fn dir_name_pascal_case(dir: &Path) -> String {
    let name = dir
        .file_name()
        .unwrap_or_else(|| panic!("missing dir name for {}", dir.display()))
        .to_string_lossy()
        .to_string();
    snake_to_pascal_case(&name)
}

fn snake_to_pascal_case(value: &str) -> String {
    value
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            let Some(first) = chars.next() else {
                return String::new();
            };
            let mut pascal = String::new();
            pascal.extend(first.to_uppercase());
            pascal.push_str(chars.as_str());
            pascal
        })
        .collect::<String>()
}

fn use_tree_has_glob(tree: &UseTree) -> bool {
    match tree {
        UseTree::Glob(_) => true,
        UseTree::Group(group) => group.items.iter().any(use_tree_has_glob),
        UseTree::Path(path) => use_tree_has_glob(&path.tree),
        UseTree::Name(_) | UseTree::Rename(_) => false,
    }
}

fn is_pub_crate(vis: &Visibility) -> bool {
    match vis {
        Visibility::Restricted(restricted) => {
            restricted.in_token.is_none() && restricted.path.is_ident("crate")
        },
        _ => false,
    }
}

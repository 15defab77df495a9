use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use syn::{File, Item, UseTree, Visibility};

#[test]
fn given_widgets_when_validating_conventions_then_all_modules_comply() {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let widgets_dir = manifest_dir.join("src/widgets");
    let mod_rs = widgets_dir.join("mod.rs");

    let mut violations: Vec<String> = Vec::new();

    let mod_file = parse(&mod_rs);
    let mut declared_widgets = BTreeSet::new();
    for item in &mod_file.items {
        if let Item::Mod(item_mod) = item {
            if is_pub_crate(&item_mod.vis) && item_mod.content.is_none() {
                declared_widgets.insert(item_mod.ident.to_string());
            } else {
                violations.push(format!(
                    "{}: module declaration '{}' must be pub(crate) mod <name>;",
                    mod_rs.display(),
                    item_mod.ident
                ));
            }
        }
    }

    let fs_widgets: BTreeSet<String> = read_dir_sorted(&widgets_dir)
        .into_iter()
        .filter(|path| path.is_dir())
        .filter_map(|path| file_stem(&path))
        .collect();

    if declared_widgets != fs_widgets {
        violations.push(format!(
            "{}: declared widgets {:?} do not match directories {:?}",
            mod_rs.display(),
            declared_widgets,
            fs_widgets
        ));
    }

    for widget in &fs_widgets {
        validate_widget_dir(&widgets_dir.join(widget), widget, &mut violations);
    }

    assert!(
        violations.is_empty(),
        "widget convention violations:\n{}",
        violations.join("\n")
    );
}

#[test]
fn given_module_path_ending_in_log_when_scanning_then_no_logging_is_reported() {
    let source = "use crate::widgets::dialog::event::DialogIntent;\n\
                  use crate::catalog::Entry;";

    assert!(!contains_path(source, "log::"));
}

#[test]
fn given_logging_macro_when_scanning_then_log_path_is_reported() {
    assert!(contains_path("log::info!(\"opened\");", "log::"));
    assert!(contains_path("    ::log::debug!(\"x\");", "log::"));
    assert!(contains_path("let task = iced::Task::none();", "Task::"));
    assert!(!contains_path("let task = MyTask::none();", "Task::"));
}

fn validate_widget_dir(dir: &Path, widget: &str, violations: &mut Vec<String>) {
    for required in ["mod.rs", "event.rs", "model.rs", "view/mod.rs"] {
        if !dir.join(required).is_file() {
            violations.push(format!(
                "{}: missing required file {required}",
                dir.display()
            ));
        }
    }

    let widget_prefix = snake_to_pascal_case(widget);
    let event_rs = dir.join("event.rs");
    if event_rs.is_file() {
        let intent_name = format!("{widget_prefix}Intent");
        let has_intent = parse(&event_rs).items.iter().any(|item| {
            matches!(item, Item::Enum(item_enum) if item_enum.ident == intent_name)
        });
        if !has_intent {
            violations.push(format!(
                "{}: expected intent enum {intent_name}",
                event_rs.display()
            ));
        }
    }

    let view_dir = dir.join("view");
    if !view_dir.is_dir() {
        return;
    }

    for path in read_dir_sorted(&view_dir) {
        if path.extension().is_none_or(|ext| ext != "rs") {
            continue;
        }

        let file = parse(&path);
        let is_aggregator = path.file_name().is_some_and(|name| name == "mod.rs");
        if is_aggregator && !declares_view(&file) {
            continue;
        }

        let prefix = if is_aggregator {
            widget_prefix.clone()
        } else {
            file_stem(&path)
                .map(|stem| snake_to_pascal_case(&stem))
                .unwrap_or_default()
        };
        validate_view_file(&path, &file, &prefix, violations);
    }
}

fn validate_view_file(
    file_path: &Path,
    file: &File,
    expected_prefix: &str,
    violations: &mut Vec<String>,
) {
    let source = fs::read_to_string(file_path).unwrap_or_else(|err| {
        panic!("failed to read {}: {err}", file_path.display())
    });

    for forbidden in ["crate::app::", "crate::state::", "crate::routers::"] {
        if contains_path(&source, forbidden) {
            violations.push(format!(
                "{}: views must not depend on {forbidden}",
                file_path.display()
            ));
        }
    }

    for forbidden in [
        "log::",
        "std::fs::",
        "std::process::Command",
        "Task::",
        "iced::Task",
        "Instant::now",
    ] {
        if contains_path(&source, forbidden) {
            violations.push(format!(
                "{}: forbidden side-effect pattern detected: {forbidden}",
                file_path.display()
            ));
        }
    }

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
            Item::Enum(item_enum) => {
                let name = item_enum.ident.to_string();
                if name.ends_with("Event") || name.ends_with("Intent") {
                    violations.push(format!(
                        "{}: event contract '{name}' belongs in event.rs",
                        file_path.display()
                    ));
                }
            },
            Item::Use(item_use) if use_tree_has_glob(&item_use.tree) => {
                violations.push(format!(
                    "{}: wildcard use/import is forbidden",
                    file_path.display()
                ));
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
        if name != format!("{expected_prefix}Props") {
            violations.push(format!(
                "{}: props type '{name}' must be named '{expected_prefix}Props'",
                file_path.display()
            ));
        }
    }
}

/// Find `pattern` starting at a path segment boundary, so `log::` does not
/// match inside `dialog::`.
fn contains_path(source: &str, pattern: &str) -> bool {
    source.match_indices(pattern).any(|(index, _)| {
        source[..index]
            .chars()
            .next_back()
            .is_none_or(|prev| !(prev.is_alphanumeric() || prev == '_'))
    })
}

fn declares_view(file: &File) -> bool {
    file.items.iter().any(|item| {
        matches!(item, Item::Fn(item_fn) if item_fn.sig.ident == "view")
    })
}

fn parse(path: &Path) -> File {
    let source = fs::read_to_string(path).unwrap_or_else(|err| {
        panic!("failed to read {}: {err}", path.display())
    });
    syn::parse_file(&source).unwrap_or_else(|err| {
        panic!("failed to parse {}: {err}", path.display())
    })
}

fn read_dir_sorted(dir: &Path) -> Vec<PathBuf> {
    let entries = fs::read_dir(dir).unwrap_or_else(|err| {
        panic!("failed to read dir {}: {err}", dir.display())
    });
    let mut paths: Vec<PathBuf> = entries
        .map(|entry| {
            entry
                .unwrap_or_else(|err| panic!("failed to read dir entry: {err}"))
                .path()
        })
        .collect();
    paths.sort();
    paths
}

fn file_stem(path: &Path) -> Option<String> {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
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

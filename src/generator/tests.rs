use super::*;
use crate::spec::{parse_module_spec_yaml, AccessSpec, ControllerSpec, MenuLinkSpec, ModuleSpec, RouterItemSpec};
use serde_yaml::Value;

fn module(items: Vec<RouterItemSpec>) -> ModuleSpec {
    ModuleSpec {
        base: "module".to_string(),
        root_name: "test_module".to_string(),
        readable_name: Some("Test Module".to_string()),
        short_description: Some("Test Module description".to_string()),
        package: None,
        router_items: items,
        readme: false,
    }
}

fn item(path: &str, controller: ControllerSpec, access: AccessSpec) -> RouterItemSpec {
    RouterItemSpec {
        path: path.to_string(),
        title: None,
        controller,
        access,
        menu_link: None,
    }
}

fn generate(spec: &ModuleSpec) -> GeneratedFileSet {
    generate_module_files(spec, &GeneratorConfig::default()).unwrap()
}

fn yaml(files: &GeneratedFileSet, path: &str) -> Value {
    serde_yaml::from_str(files.get(path).unwrap()).unwrap()
}

fn prop<'a>(doc: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().try_fold(doc, |v, k| v.get(*k))
}

fn prop_str<'a>(doc: &'a Value, keys: &[&str]) -> &'a str {
    prop(doc, keys)
        .and_then(Value::as_str)
        .unwrap_or_else(|| panic!("missing string property {keys:?}"))
}

fn assert_files(files: &GeneratedFileSet, expected: &[&str]) {
    let mut actual: Vec<&str> = files.paths().collect();
    let mut expected = expected.to_vec();
    actual.sort_unstable();
    expected.sort_unstable();
    assert_eq!(actual, expected);
}

#[test]
fn test_basic_route_generation() {
    let mut other = item(
        "/my/other-path",
        ControllerSpec::of_type("controller"),
        AccessSpec::of_type("role"),
    );
    other.title = Some("My Other Page".to_string());
    let mut entity_access = AccessSpec::of_type("entity_access");
    entity_access.entity_type_id = Some("node".to_string());
    entity_access.entity_access_operation = Some("update".to_string());
    let mut param = item(
        "/my/{parameter}/path",
        ControllerSpec::of_type("controller"),
        entity_access,
    );
    param.title = Some("My Parameter Page".to_string());

    let spec = module(vec![
        item(
            "/my/path",
            ControllerSpec::of_type("controller"),
            AccessSpec::of_type("permission"),
        ),
        other,
        param,
    ]);
    let files = generate(&spec);

    assert_files(
        &files,
        &[
            "test_module.info.yml",
            "test_module.routing.yml",
            "src/Controller/MyPathController.php",
            "src/Controller/MyOtherPathController.php",
            "src/Controller/MyParameterPathController.php",
        ],
    );

    let routing = yaml(&files, "test_module.routing.yml");
    assert_eq!(prop_str(&routing, &["test_module.my.path", "path"]), "/my/path");
    assert_eq!(
        prop_str(&routing, &["test_module.my.path", "defaults", "_controller"]),
        r"\Drupal\test_module\Controller\MyPathController::content"
    );
    assert_eq!(
        prop_str(&routing, &["test_module.my.path", "defaults", "_title"]),
        "myPage"
    );
    assert_eq!(
        prop_str(&routing, &["test_module.my.path", "requirements", "_permission"]),
        "access content"
    );

    assert_eq!(
        prop_str(&routing, &["test_module.my.other_path", "path"]),
        "/my/other-path"
    );
    assert_eq!(
        prop_str(&routing, &["test_module.my.other_path", "defaults", "_controller"]),
        r"\Drupal\test_module\Controller\MyOtherPathController::content"
    );
    assert_eq!(
        prop_str(&routing, &["test_module.my.other_path", "defaults", "_title"]),
        "My Other Page"
    );
    assert_eq!(
        prop_str(&routing, &["test_module.my.other_path", "requirements", "_role"]),
        "authenticated"
    );

    assert_eq!(
        prop_str(&routing, &["test_module.my.parameter.path", "path"]),
        "/my/{parameter}/path"
    );
    assert_eq!(
        prop_str(&routing, &["test_module.my.parameter.path", "defaults", "_controller"]),
        r"\Drupal\test_module\Controller\MyParameterPathController::content"
    );
    assert_eq!(
        prop_str(&routing, &["test_module.my.parameter.path", "requirements", "_entity_access"]),
        "node.update"
    );

    let php = files.get("src/Controller/MyPathController.php").unwrap();
    assert!(php.starts_with("<?php\n\nnamespace Drupal\\test_module\\Controller;\n"));
    assert!(php.contains("class MyPathController extends ControllerBase {"));
    assert!(php.contains("  public function content() {"));
    assert!(php.trim_end().ends_with('}'));

    let php = files.get("src/Controller/MyParameterPathController.php").unwrap();
    assert!(php.contains("  public function content($parameter) {"));
    assert!(php.contains("   * @param mixed $parameter"));
}

#[test]
fn test_route_controller_types() {
    let mut view = ControllerSpec::of_type("entity_view");
    view.entity_type_id = Some("node".to_string());
    view.entity_view_mode = Some("teaser".to_string());
    let mut form = ControllerSpec::of_type("entity_form");
    form.entity_type_id = Some("node".to_string());
    form.entity_form_mode = Some("edit".to_string());
    let mut list = ControllerSpec::of_type("entity_list");
    list.entity_type_id = Some("node".to_string());

    let access = || AccessSpec::of_type("access");
    let spec = module(vec![
        item("/my/path/controller", ControllerSpec::of_type("controller"), access()),
        item("/my/path/form", ControllerSpec::of_type("form"), access()),
        item("/my/path/entity-view", view, access()),
        item("/my/path/entity-form", form, access()),
        item("/my/path/entity-list", list, access()),
    ]);
    let files = generate(&spec);

    assert_files(
        &files,
        &[
            "test_module.info.yml",
            "test_module.routing.yml",
            "src/Controller/MyPathControllerController.php",
        ],
    );

    let routing = yaml(&files, "test_module.routing.yml");
    assert_eq!(
        prop_str(&routing, &["test_module.my.path.controller", "defaults", "_controller"]),
        r"\Drupal\test_module\Controller\MyPathControllerController::content"
    );
    assert_eq!(
        prop_str(&routing, &["test_module.my.path.form", "defaults", "_form"]),
        r"\Drupal\module\Form\FormClassName"
    );
    assert_eq!(
        prop_str(&routing, &["test_module.my.path.entity_view", "defaults", "_entity_view"]),
        "node.teaser"
    );
    assert_eq!(
        prop_str(&routing, &["test_module.my.path.entity_form", "defaults", "_entity_form"]),
        "node.edit"
    );
    assert_eq!(
        prop_str(&routing, &["test_module.my.path.entity_list", "defaults", "_entity_list"]),
        "node"
    );
    // `access` emits no requirement at all.
    assert!(prop(&routing, &["test_module.my.path.form", "requirements"]).is_none());
}

#[test]
fn test_route_generation_with_menu_link() {
    let mut first = item(
        "/my/path",
        ControllerSpec::of_type("controller"),
        AccessSpec::of_type("permission"),
    );
    first.title = Some("My Page".to_string());
    first.menu_link = Some(MenuLinkSpec {
        title: "My link".to_string(),
        description: None,
        parent: None,
    });
    let spec = module(vec![
        first,
        item(
            "/my/other-path",
            ControllerSpec::of_type("controller"),
            AccessSpec::of_type("permission"),
        ),
    ]);
    let files = generate(&spec);

    assert_eq!(files.len(), 5);
    assert_files(
        &files,
        &[
            "test_module.info.yml",
            "test_module.routing.yml",
            "src/Controller/MyPathController.php",
            "src/Controller/MyOtherPathController.php",
            "test_module.links.menu.yml",
        ],
    );

    let menu = yaml(&files, "test_module.links.menu.yml");
    assert_eq!(prop_str(&menu, &["test_module.my.path", "title"]), "My link");
    assert_eq!(
        prop_str(&menu, &["test_module.my.path", "route_name"]),
        "test_module.my.path"
    );
    assert!(prop(&menu, &["test_module.my.other_path"]).is_none());
    assert!(prop(&menu, &["test_module.my.path", "parent"]).is_none());
}

#[test]
fn test_no_menu_links_means_no_menu_file() {
    let spec = module(vec![item(
        "/my/path",
        ControllerSpec::of_type("form"),
        AccessSpec::of_type("permission"),
    )]);
    let files = generate(&spec);
    assert!(!files.contains("test_module.links.menu.yml"));
    assert_files(&files, &["test_module.info.yml", "test_module.routing.yml"]);
}

#[test]
fn test_no_router_items_only_info() {
    let files = generate(&module(vec![]));
    assert_files(&files, &["test_module.info.yml"]);

    let info = yaml(&files, "test_module.info.yml");
    assert_eq!(prop_str(&info, &["name"]), "Test Module");
    assert_eq!(prop_str(&info, &["type"]), "module");
    assert_eq!(prop_str(&info, &["description"]), "Test Module description");
    assert_eq!(prop_str(&info, &["core"]), "8.x");
    assert!(prop(&info, &["package"]).is_none());
}

#[test]
fn test_shared_class_name_groups_methods() {
    let access = || AccessSpec::of_type("permission");
    let spec = module(vec![
        item("/my/path/controller", ControllerSpec::of_type("controller"), access()),
        item("/my/path-controller", ControllerSpec::of_type("controller"), access()),
        item("/other", ControllerSpec::of_type("controller"), access()),
    ]);
    let files = generate(&spec);

    let controllers: Vec<&str> = files
        .paths()
        .filter(|p| p.starts_with("src/Controller/"))
        .collect();
    assert_eq!(
        controllers,
        vec![
            "src/Controller/MyPathControllerController.php",
            "src/Controller/OtherController.php",
        ]
    );

    let php = files
        .get("src/Controller/MyPathControllerController.php")
        .unwrap();
    assert_eq!(php.matches("public function ").count(), 2);
    assert!(php.contains("public function content()"));
    assert!(php.contains("public function content2()"));

    let routing = yaml(&files, "test_module.routing.yml");
    assert_eq!(
        prop_str(&routing, &["test_module.my.path_controller", "defaults", "_controller"]),
        r"\Drupal\test_module\Controller\MyPathControllerController::content2"
    );
}

#[test]
fn test_class_names_from_punctuated_paths_are_php_identifiers() {
    let access = || AccessSpec::of_type("access");
    let spec = module(vec![
        item("/sitemap.xml", ControllerSpec::of_type("controller"), access()),
        item("/404", ControllerSpec::of_type("controller"), access()),
    ]);
    let files = generate(&spec);

    let sitemap = files.get("src/Controller/SitemapXmlController.php").unwrap();
    assert!(sitemap.contains("class SitemapXmlController extends ControllerBase"));
    let not_found = files.get("src/Controller/Path404Controller.php").unwrap();
    assert!(not_found.contains("class Path404Controller extends ControllerBase"));

    let routing = yaml(&files, "test_module.routing.yml");
    assert_eq!(
        prop_str(&routing, &["test_module.sitemap.xml", "defaults", "_controller"]),
        r"\Drupal\test_module\Controller\SitemapXmlController::content"
    );
    assert_eq!(
        prop_str(&routing, &["test_module.404", "defaults", "_controller"]),
        r"\Drupal\test_module\Controller\Path404Controller::content"
    );
}

#[test]
fn test_class_names_differing_only_in_case_share_one_class() {
    let access = || AccessSpec::of_type("access");
    let spec = module(vec![
        item("/a-b/x", ControllerSpec::of_type("controller"), access()),
        item("/ab/x", ControllerSpec::of_type("controller"), access()),
    ]);
    let files = generate(&spec);

    let controllers: Vec<&str> = files
        .paths()
        .filter(|p| p.starts_with("src/Controller/"))
        .collect();
    assert_eq!(controllers, vec!["src/Controller/ABXController.php"]);
    let php = files.get("src/Controller/ABXController.php").unwrap();
    assert!(php.contains("public function content()"));
    assert!(php.contains("public function content2()"));

    let routing = yaml(&files, "test_module.routing.yml");
    assert_eq!(
        prop_str(&routing, &["test_module.ab.x", "defaults", "_controller"]),
        r"\Drupal\test_module\Controller\ABXController::content2"
    );
}

#[test]
fn test_generation_from_validated_items_matches_full_generation() {
    let access = || AccessSpec::of_type("access");
    let spec = module(vec![
        item("/a-b", ControllerSpec::of_type("controller"), access()),
        item("/ab", ControllerSpec::of_type("controller"), access()),
        item("/edit", ControllerSpec::of_type("form"), access()),
    ]);
    let items = validate_router_items(&spec).unwrap();
    let from_items =
        generate_module_files_from_items(&spec, &items, &GeneratorConfig::default()).unwrap();
    let full = generate(&spec);
    assert_eq!(
        from_items.iter().collect::<Vec<_>>(),
        full.iter().collect::<Vec<_>>()
    );

    let plan = ControllerClassPlan::new("test_module", &items);
    assert_eq!(plan.class_for(0), Some("ABController"));
    assert_eq!(plan.class_for(1), Some("ABController"));
    assert_eq!(plan.class_for(2), None);
}

#[test]
fn test_route_id_collision_is_rejected() {
    let access = || AccessSpec::of_type("access");
    let spec = module(vec![
        item("/my/other-path", ControllerSpec::of_type("form"), access()),
        item("/my/other_path", ControllerSpec::of_type("form"), access()),
    ]);
    let err = generate_module_files(&spec, &GeneratorConfig::default()).unwrap_err();
    assert_eq!(
        err,
        GenerateError::DerivationCollision {
            route_id: "test_module.my.other_path".to_string(),
            first: "/my/other-path".to_string(),
            second: "/my/other_path".to_string(),
        }
    );
}

#[test]
fn test_unknown_controller_type_aborts_generation() {
    let spec = module(vec![
        item("/ok", ControllerSpec::of_type("form"), AccessSpec::of_type("access")),
        item("/bad", ControllerSpec::of_type("page"), AccessSpec::of_type("access")),
    ]);
    let err = generate_module_files(&spec, &GeneratorConfig::default()).unwrap_err();
    match err {
        GenerateError::Configuration { location, .. } => assert_eq!(location, "router_items[1]"),
        other => panic!("expected configuration error, got {other:?}"),
    }
}

#[test]
fn test_invalid_module_fields() {
    let mut spec = module(vec![]);
    spec.base = "theme".to_string();
    assert!(matches!(
        generate_module_files(&spec, &GeneratorConfig::default()),
        Err(GenerateError::Configuration { ref location, .. }) if location == "base"
    ));

    let mut spec = module(vec![]);
    spec.root_name = "Test-Module".to_string();
    assert!(matches!(
        generate_module_files(&spec, &GeneratorConfig::default()),
        Err(GenerateError::Configuration { ref location, .. }) if location == "root_name"
    ));
}

#[test]
fn test_path_without_leading_slash_rejected() {
    let spec = module(vec![item(
        "my/path",
        ControllerSpec::of_type("controller"),
        AccessSpec::of_type("access"),
    )]);
    let err = generate_module_files(&spec, &GeneratorConfig::default()).unwrap_err();
    assert!(err.to_string().contains("path must start with '/'"));
}

#[test]
fn test_generation_is_deterministic() {
    let yaml_spec = r#"
root_name: test_module
readable_name: Test Module
readme: true
router_items:
  - path: /my/path
    controller: { controller_type: controller }
    access: { access_type: permission }
    menu_link: { title: My link, parent: system.admin }
  - path: /my/{node}/edit
    title: "Bob's page"
    controller: { controller_type: controller }
    access: { access_type: role, role: editor }
"#;
    let spec = parse_module_spec_yaml(yaml_spec).unwrap();
    let first = generate(&spec);
    let second = generate(&spec);
    assert_eq!(first, second);

    let readme = first.get("README.md").unwrap();
    assert!(readme.starts_with("# Test Module"));
    assert!(readme.contains("| `test_module.my.node.edit` | `/my/{node}/edit` | Bob's page |"));

    let routing = yaml(&first, "test_module.routing.yml");
    assert_eq!(
        prop_str(&routing, &["test_module.my.node.edit", "requirements", "_role"]),
        "editor"
    );

    let menu = yaml(&first, "test_module.links.menu.yml");
    assert_eq!(prop_str(&menu, &["test_module.my.path", "parent"]), "system.admin");

    let php = first.get("src/Controller/MyNodeEditController.php").unwrap();
    assert!(php.contains(r"$this->t('Bob\'s page')"));
}

#[test]
fn test_config_overrides_flow_into_output() {
    let config = GeneratorConfig {
        core: "9.x".to_string(),
        form_class: r"\Drupal\test_module\Form\SettingsForm".to_string(),
        ..GeneratorConfig::default()
    };
    let spec = module(vec![item(
        "/admin/settings",
        ControllerSpec::of_type("form"),
        AccessSpec::of_type("access"),
    )]);
    let files = generate_module_files(&spec, &config).unwrap();
    let routing = yaml(&files, "test_module.routing.yml");
    assert_eq!(
        prop_str(&routing, &["test_module.admin.settings", "defaults", "_form"]),
        r"\Drupal\test_module\Form\SettingsForm"
    );
    assert_eq!(prop_str(&routing, &["test_module.admin.settings", "defaults", "_title"]), "adminPage");
    let info = yaml(&files, "test_module.info.yml");
    assert_eq!(prop_str(&info, &["core"]), "9.x");
}

#[test]
fn test_write_to_respects_force_scope_and_dry_run() {
    let spec = module(vec![item(
        "/my/path",
        ControllerSpec::of_type("controller"),
        AccessSpec::of_type("permission"),
    )]);
    let files = generate(&spec);
    let dir = tempfile::tempdir().unwrap();

    let dry = files
        .write_to(
            dir.path(),
            &WriteOptions {
                dry_run: true,
                ..WriteOptions::default()
            },
        )
        .unwrap();
    assert_eq!(dry.written.len(), 3);
    assert!(!dir.path().join("test_module.info.yml").exists());

    let scope = GenerationScope {
        routing: true,
        ..GenerationScope::none()
    };
    let partial = files
        .write_to(
            dir.path(),
            &WriteOptions {
                scope,
                ..WriteOptions::default()
            },
        )
        .unwrap();
    assert_eq!(partial.written, vec!["test_module.routing.yml".to_string()]);
    assert_eq!(partial.out_of_scope.len(), 2);

    let full = files.write_to(dir.path(), &WriteOptions::default()).unwrap();
    assert_eq!(full.skipped, vec!["test_module.routing.yml".to_string()]);
    assert!(dir
        .path()
        .join("src")
        .join("Controller")
        .join("MyPathController.php")
        .exists());

    let forced = files
        .write_to(
            dir.path(),
            &WriteOptions {
                force: true,
                ..WriteOptions::default()
            },
        )
        .unwrap();
    assert_eq!(forced.written.len(), 3);
    assert!(forced.skipped.is_empty());
}

/// End-to-end tests for the generation pass: write a route tree to disk,
/// run a full pass, and inspect the generated module.
use std::fs;
use std::path::Path;

use routeforge::{generate, DiscoveredRoute, GenerateOptions, NullReporter, Reporter};

fn write_tree(root: &Path, files: &[(&str, &str)]) {
    for (rel, contents) in files {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }
}

fn run(root: &Path, output: &Path, deno: bool) -> String {
    let options = GenerateOptions {
        routes_dir: root.to_path_buf(),
        output_file: output.to_path_buf(),
        deno,
    };
    generate(&options, &mut NullReporter).unwrap();
    fs::read_to_string(output).unwrap()
}

fn registration_lines(module: &str) -> Vec<&str> {
    module
        .lines()
        .filter(|line| line.trim_start().starts_with("app."))
        .collect()
}

#[test]
fn generates_sorted_registrations() {
    let dir = tempfile::tempdir().unwrap();
    let routes = dir.path().join("routes");
    write_tree(
        &routes,
        &[
            ("index.ts", "export const GET = (c) => c.text(\"home\");\n"),
            (
                "users/[id].ts",
                "export const GET = handler;\nexport const POST = handler;\n",
            ),
            ("users/profile.ts", "export const GET = handler;\n"),
            ("api/[[path]].ts", "export const GET = handler;\n"),
        ],
    );

    let module = run(&routes, &dir.path().join("routes.generated.ts"), false);
    let lines = registration_lines(&module);

    let position = |needle: &str| {
        lines
            .iter()
            .position(|line| line.contains(needle))
            .unwrap_or_else(|| panic!("no registration for {needle}"))
    };

    // Root index sorts ahead of everything.
    assert_eq!(position("\"/\""), 0);
    // Static segment outranks the dynamic one at the same position.
    assert!(position("\"/users/profile\"") < position("\"/users/:id\""));
    // Both methods of the same file share one path and one alias.
    assert!(module.contains("app.get(\"/users/:id\", users_id.GET);"));
    assert!(module.contains("app.post(\"/users/:id\", users_id.POST);"));
    // Catch-all syntax renders the bounded one-or-more marker.
    assert!(module.contains("app.get(\"/api/:path{.+}\", api_path.GET);"));
    // One import per file, aliased.
    assert!(module.contains("import * as index from \"./routes\";"));
    assert!(module.contains("import * as users_id from \"./routes/users/[id]\";"));
    assert!(module.contains("import * as users_profile from \"./routes/users/profile\";"));
    assert!(module.contains("import * as api_path from \"./routes/api/[[path]]\";"));
}

#[test]
fn factory_handlers_register_with_spread() {
    let dir = tempfile::tempdir().unwrap();
    let routes = dir.path().join("routes");
    write_tree(
        &routes,
        &[(
            "posts.ts",
            "export const GET = handler;\n\
             export const POST = factory.createHandlers(validate, create);\n",
        )],
    );

    let module = run(&routes, &dir.path().join("routes.generated.ts"), false);
    assert!(module.contains("app.get(\"/posts\", posts.GET);"));
    assert!(module.contains("app.post(\"/posts\", ...posts.POST);"));
}

#[test]
fn regeneration_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let routes = dir.path().join("routes");
    write_tree(
        &routes,
        &[
            ("index.ts", "export const GET = handler;\n"),
            ("users/[id].ts", "export const PATCH = handler;\n"),
        ],
    );

    let output = dir.path().join("routes.generated.ts");
    let first = run(&routes, &output, false);
    let second = run(&routes, &output, false);
    assert_eq!(first, second);
}

#[test]
fn deno_mode_keeps_extensions_in_imports() {
    let dir = tempfile::tempdir().unwrap();
    let routes = dir.path().join("routes");
    write_tree(
        &routes,
        &[
            ("index.ts", "export const GET = handler;\n"),
            ("widgets.tsx", "export const GET = handler;\n"),
        ],
    );

    let module = run(&routes, &dir.path().join("routes.generated.ts"), true);
    assert!(module.contains("import * as index from \"./routes/index.ts\";"));
    assert!(module.contains("import * as widgets from \"./routes/widgets.tsx\";"));
    // Route paths are unaffected by the import dialect.
    assert!(module.contains("app.get(\"/\", index.GET);"));
    assert!(module.contains("app.get(\"/widgets\", widgets.GET);"));
}

#[test]
fn uppercase_and_unrecognized_files_are_invisible() {
    let dir = tempfile::tempdir().unwrap();
    let routes = dir.path().join("routes");
    write_tree(
        &routes,
        &[
            ("index.ts", "export const GET = handler;\n"),
            ("Component.tsx", "export const GET = handler;\n"),
            ("readme.md", "export const GET = handler;\n"),
            ("util.ts", "export const formatDate = () => {};\n"),
        ],
    );

    let module = run(&routes, &dir.path().join("routes.generated.ts"), false);
    let lines = registration_lines(&module);
    assert_eq!(lines.len(), 1);
    assert!(module.contains("app.get(\"/\", index.GET);"));
    assert!(!module.contains("Component"));
    assert!(!module.contains("util"));
}

#[test]
fn reporter_sees_every_route_in_discovery_order() {
    struct Recording(Vec<String>, bool);

    impl Reporter for Recording {
        fn route_found(&mut self, route: &DiscoveredRoute) {
            self.0
                .push(format!("{} {}", route.method.export_name(), route.path));
        }
        fn output_written(&mut self, _path: &Path) {
            self.1 = true;
        }
    }

    let dir = tempfile::tempdir().unwrap();
    let routes = dir.path().join("routes");
    write_tree(
        &routes,
        &[(
            "users/[id].ts",
            "export const POST = handler;\nexport const GET = handler;\n",
        )],
    );

    let options = GenerateOptions {
        routes_dir: routes,
        output_file: dir.path().join("routes.generated.ts"),
        deno: false,
    };
    let mut reporter = Recording(Vec::new(), false);
    generate(&options, &mut reporter).unwrap();

    // Method-declaration order, not file order.
    assert_eq!(reporter.0, vec!["GET /users/:id", "POST /users/:id"]);
    assert!(reporter.1);
}

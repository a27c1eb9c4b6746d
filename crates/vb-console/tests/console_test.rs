//! Integration tests for the console: gating, printing, inspection and framing

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::sync::Arc;

    use pretty_assertions::assert_eq;
    use serial_test::serial;
    use vb_console::{
        Category, ClassInfo, Color, Console, Error, Inspection, MemberKind, MemoryWriter, Options,
        Reflect, Result, Setting, ValueKind,
    };

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new("vb_console=trace"))
            .with_test_writer()
            .try_init();
    }

    fn enabled_console() -> (Console, MemoryWriter) {
        init_tracing();
        let memory = MemoryWriter::new();
        let options = Options {
            width: 80,
            enabled: true,
            ..Options::default()
        };
        (Console::with_options(options, memory.clone().into()), memory)
    }

    fn my_class() -> Arc<ClassInfo> {
        Arc::new(
            ClassInfo::new("MyClass")
                .module("tests")
                .method("__init__")
                .value("klass_var1", ValueKind::Integer)
                .value("klass_var3", ValueKind::String)
                .value("klass_var4", ValueKind::Sequence)
                .value("klass_var5", ValueKind::Mapping)
                .value("klass_var6", ValueKind::Set)
                .method("get_name_and_method")
                .method("_private_method")
                .property("badmin")
                .property("admin")
                .static_method("statik")
                .class_method("klass_method"),
        )
    }

    fn klass_for_sort() -> Arc<ClassInfo> {
        Arc::new(
            ClassInfo::new("KlassForSort")
                .module("tests")
                .property("admin1")
                .value("attr1", ValueKind::Integer)
                .value("Attr2", ValueKind::String)
                .method("get_name_and_method"),
        )
    }

    struct FailingGetter;

    impl Reflect for FailingGetter {
        fn type_name(&self) -> String {
            "FailingGetter".to_string()
        }

        fn members(&self) -> Result<Vec<String>> {
            Err(anyhow::anyhow!("property getter raised").into())
        }
    }

    #[test]
    fn test_gate_off_writes_nothing() {
        let memory = MemoryWriter::new();
        let mut console = Console::with_options(
            Options {
                width: 80,
                ..Options::default()
            },
            memory.clone().into(),
        );

        console.log(&"test 1").unwrap();
        console.out(&vec![1, 2, 3], Some("extra")).unwrap();
        console.dir(&[&my_class().instantiate()], []).unwrap();

        assert!(!console.is_enabled());
        assert!(memory.is_empty());
    }

    #[test]
    fn test_single_value() {
        let (mut console, memory) = enabled_console();
        console.call(&("test 1",), []).unwrap();
        console.log(&"test 1").unwrap();
        assert_eq!(memory.contents(), "('test 1',)\n('test 1',)\n");
    }

    #[test]
    fn test_multiple_values_sort_mapping_keys() {
        let (mut console, memory) = enabled_console();
        let mut mapping = BTreeMap::new();
        mapping.insert("foo", serde_json::json!(1));
        mapping.insert("bar", serde_json::json!("2"));

        console.call(&("test 2", mapping), []).unwrap();
        assert_eq!(memory.contents(), "('test 2', {'bar': '2', 'foo': 1})\n");
    }

    #[test]
    fn test_array_is_a_single_value() {
        let (mut console, memory) = enabled_console();
        console.log(&[1, 2, 3]).unwrap();
        console.log(&vec![1, 2, 3]).unwrap();
        console.log(&[0i32; 0]).unwrap();
        assert_eq!(memory.contents(), "([1, 2, 3],)\n([1, 2, 3],)\n([],)\n");
    }

    #[test]
    fn test_no_values_prints_nothing() {
        let (mut console, memory) = enabled_console();
        console.call(&(), []).unwrap();
        vb_console::console!(console).unwrap();
        assert!(memory.is_empty());
    }

    #[test]
    fn test_dir_reports_every_category() {
        let (mut console, memory) = enabled_console();
        let obj = my_class().instantiate().field("name");

        let inspection = Inspection::of(&obj).unwrap();
        for category in Category::ALL {
            let names = inspection.get(category).unwrap();
            assert!(!names.is_empty(), "{} is empty", category);
        }

        console.dir(&[&obj], []).unwrap();
        let output = memory.contents();
        for category in Category::ALL {
            assert!(output.contains(&format!("'{}'", category.key())), "{}", output);
        }
    }

    #[test]
    fn test_dir_sorts_case_insensitively() {
        let (mut console, memory) = enabled_console();
        let obj = klass_for_sort().instantiate().field("name").field("Name2");

        console.dir(&[&obj], [Setting::Width(300)]).unwrap();
        assert_eq!(
            memory.contents(),
            "{'class_variables': ['attr1', 'Attr2'], \
             'data_attributes': ['name', 'Name2'], \
             'methods': ['get_name_and_method'], \
             'properties': ['admin1'], \
             'public_attributes': ['admin1', 'attr1', 'Attr2', 'get_name_and_method', 'name', 'Name2']}\n"
        );
    }

    #[test]
    fn test_dir_labels_each_object() {
        let (mut console, memory) = enabled_console();
        let class = my_class();
        let obj = class.instantiate();

        console
            .dir(
                &[&obj, class.as_ref()],
                [Setting::Basic(false), Setting::Source("dbg".into())],
            )
            .unwrap();

        let headers: Vec<String> = memory
            .contents()
            .lines()
            .filter(|line| line.starts_with('['))
            .map(|line| line.trim_end_matches('.').to_string())
            .collect();
        assert_eq!(
            headers,
            vec![
                "[dbg : instance of MyClass | tests::MyClass]",
                "[dbg : MyClass | type]",
            ]
        );
    }

    #[test]
    fn test_dir_without_objects_is_a_no_op() {
        let (mut console, memory) = enabled_console();
        console.dir(&[], [Setting::Indent(2)]).unwrap();
        assert!(memory.is_empty());
        assert_eq!(console.options().indent, 2);
    }

    #[test]
    fn test_instance_without_fields_has_no_data_attributes() {
        let obj = my_class().instantiate();
        let inspection = Inspection::of(&obj).unwrap();
        assert!(!inspection.contains(Category::DataAttributes));
        assert!(inspection.contains(Category::Methods));
    }

    #[test]
    fn test_colored_output_has_escape_codes() {
        let (mut console, memory) = enabled_console();
        let obj = klass_for_sort().instantiate();

        console
            .dir(&[&obj], [Setting::Colored(true), Setting::OutColor(Color::Blue)])
            .unwrap();

        let output = memory.contents();
        assert!(output.starts_with("\x1b[34m{"), "{:?}", output);
        assert!(output.contains("\x1b[33m'methods'\x1b[0m: \x1b[38m ['get_name_and_method']"));
        assert!(output.ends_with("\x1b[0m\n"));
    }

    #[test]
    fn test_unknown_option_leaves_sink_untouched() {
        let (mut console, memory) = enabled_console();

        let err = console
            .configure_str([("colour", "red")])
            .unwrap_err();
        assert!(matches!(err, Error::InvalidOption(ref name) if name == "colour"));
        assert_eq!(err.to_string(), "colour is not a valid option");

        let err = Setting::parse("verbose", "1").unwrap_err();
        assert!(matches!(err, Error::InvalidOption(_)));
        assert!(memory.is_empty());
    }

    #[test]
    fn test_invalid_setting_in_call_prints_nothing() {
        let (mut console, memory) = enabled_console();
        let result = console.call(&("x",), [Setting::Width(0)]);
        assert!(matches!(result, Err(Error::InvalidValue { .. })));
        assert!(memory.is_empty());
    }

    #[test]
    fn test_framing_toggle() {
        let (mut console, memory) = enabled_console();

        console.log(&"short").unwrap();
        assert_eq!(memory.contents().lines().count(), 1);

        memory.clear();
        console
            .call(&("short",), [Setting::Basic(false), Setting::SeperatorChar("=".into())])
            .unwrap();
        let output = memory.contents();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("[n/a]===="));
        assert_eq!(lines[0].chars().count(), 80);
        assert_eq!(lines[1], "('short',)");
        assert_eq!(lines[2], "=".repeat(80));

        // Settings given to a call persist.
        memory.clear();
        console.log(&"again").unwrap();
        assert_eq!(memory.contents().lines().count(), 3);
    }

    #[test]
    fn test_reflection_error_propagates() {
        let (mut console, memory) = enabled_console();
        let err = console.inspect(&FailingGetter).unwrap_err();
        assert!(matches!(err, Error::Reflection(ref msg) if msg == "property getter raised"));
        assert!(memory.is_empty());
    }

    #[test]
    fn test_hand_written_reflect() {
        struct Config;

        impl Reflect for Config {
            fn type_name(&self) -> String {
                "Config".to_string()
            }

            fn members(&self) -> Result<Vec<String>> {
                Ok(vec!["load".into(), "__repr__".into(), "_cache".into()])
            }

            fn class_members(&self) -> Result<Option<Vec<(String, MemberKind)>>> {
                Ok(Some(vec![("load".into(), MemberKind::ClassMethod)]))
            }
        }

        let inspection = Inspection::of(&Config).unwrap();
        assert_eq!(inspection.get(Category::InternalMethods).unwrap(), &["__repr__"]);
        assert_eq!(inspection.get(Category::PrivateMethods).unwrap(), &["_cache"]);
        assert_eq!(inspection.get(Category::ClassMethods).unwrap(), &["load"]);
    }

    #[test]
    fn test_settings_from_toml_configure() {
        let (mut console, memory) = enabled_console();
        let settings = Options::settings_from_toml(
            r#"
            basic = false
            width = 12
            source = "toml"
            seperator_char = "-"
            "#,
        )
        .unwrap();
        console.configure(settings).unwrap();
        console.log(&1).unwrap();

        assert_eq!(memory.contents(), "[toml]------\n(1,)\n------------\n");
    }

    #[test]
    #[serial]
    fn test_env_gate() {
        let memory = MemoryWriter::new();

        std::env::set_var("ENABLE_CONSOLE", "1");
        let mut console = Console::new([Setting::Writer(memory.clone().into())]).unwrap();
        std::env::remove_var("ENABLE_CONSOLE");
        assert!(console.is_enabled());
        console.log(&"on").unwrap();
        assert_eq!(memory.contents(), "('on',)\n");

        memory.clear();
        let mut console = vb_console::console([Setting::Writer(memory.clone().into())]).unwrap();
        assert!(!console.is_enabled());
        console.log(&"off").unwrap();
        assert!(memory.is_empty());
    }

    #[test]
    #[serial]
    fn test_explicit_enable_overrides_env() {
        std::env::set_var("ENABLE_CONSOLE", "no");
        let console = Console::new([Setting::Enabled(true)]).unwrap();
        std::env::remove_var("ENABLE_CONSOLE");
        assert!(console.is_enabled());
    }

    #[test]
    fn test_serde_values_render_like_records() {
        #[derive(serde::Serialize)]
        struct Point {
            x: i32,
            y: Option<i32>,
        }

        let (mut console, memory) = enabled_console();
        console
            .call(&(Point { x: 1, y: None }, true, b"ab".as_slice()), [])
            .unwrap();
        assert_eq!(memory.contents(), "(Point(x=1, y=None), True, [97, 98])\n");
    }
}

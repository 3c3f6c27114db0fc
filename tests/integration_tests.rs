use itamaraca::{driver, output, Generator, GeneratorError, RunConfig};
use std::path::PathBuf;

fn temp_csv(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("itamaraca-{}-{}.csv", name, std::process::id()))
}

mod test_generator {
    use super::*;

    #[test]
    fn test_reference_sequence() {
        let mut gen = RunConfig::default().generator().unwrap();

        assert_eq!(format!("{:.4}", gen.next_value()), "5656.1500");
        assert_eq!(format!("{:.4}", gen.next_value()), "1093.3655");
    }

    #[test]
    fn test_deterministic() {
        let run = || -> Vec<u64> {
            Generator::new(10000.0, &[800.0, 25.0, 3005.0], 1.97)
                .unwrap()
                .take(10_000)
                .map(f64::to_bits)
                .collect()
        };

        assert_eq!(run(), run());
    }

    #[test]
    fn test_streams_do_not_interfere() {
        let mut a = Generator::new(500.0, &[1.0, 2.0, 3.0], 0.7).unwrap();
        let mut b = a.clone();
        let mut other = Generator::new(10000.0, &[800.0, 25.0, 3005.0], 1.97).unwrap();

        for _ in 0..1000 {
            let x = a.next_value();
            other.next_value();
            other.next_value();
            assert_eq!(x.to_bits(), b.next_value().to_bits());
        }
    }

    #[test]
    fn test_wrong_seed_count() {
        for seeds in [vec![], vec![1.0], vec![1.0, 2.0], vec![1.0, 2.0, 3.0, 4.0]] {
            assert!(matches!(
                Generator::new(10.0, &seeds, 1.0),
                Err(GeneratorError::InvalidArgument(_))
            ));
        }
    }
}

mod test_export {
    use super::*;

    #[test]
    fn test_file_round_trip() {
        let path = temp_csv("round-trip");
        let mut gen = RunConfig::default().generator().unwrap();

        let rows = output::export(&path, &mut gen, 10_000, |_, _| {}).unwrap();
        assert_eq!(rows, 10_000);

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 10_001);
        assert_eq!(lines[0], "Index,Value");
        assert_eq!(lines[1], "0,5656.1500");
        assert_eq!(lines[2], "1,1093.3655");
        assert!(lines[10_000].starts_with("9999,"));
        assert!(content.ends_with('\n') && !content.ends_with("\n\n"));

        for line in &lines[1..] {
            let (_, value) = line.split_once(',').unwrap();
            let decimals = value.split_once('.').unwrap().1;
            assert_eq!(decimals.len(), 4);
            assert!(value.parse::<f64>().unwrap() >= 0.0);
        }

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_unwritable_path() {
        let path = std::env::temp_dir()
            .join(format!("itamaraca-missing-dir-{}", std::process::id()))
            .join("out.csv");
        let mut gen = RunConfig::default().generator().unwrap();

        assert!(matches!(
            output::export(&path, &mut gen, 10, |_, _| {}),
            Err(GeneratorError::Io(_))
        ));
    }
}

mod test_driver {
    use super::*;

    fn render(report: &driver::Report) -> String {
        let mut out = Vec::new();
        report.render(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_short_run_previews_every_row() {
        let path = temp_csv("driver-short");
        let mut gen = RunConfig::default().generator().unwrap();
        let mut rows_seen = Vec::new();

        let report = driver::run(&mut gen, 3, &path, |index| rows_seen.push(index)).unwrap();

        assert_eq!(report.rows, 3);
        assert_eq!(rows_seen, vec![0, 1, 2]);
        assert_eq!(report.preview.len(), 3);
        assert_eq!(report.preview[0], "Sample 1: 5656.1500");
        assert_eq!(report.preview[1], "Sample 2: 1093.3655");
        assert!(report.preview[2].starts_with("Sample 3: "));

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Index,Value");
        assert_eq!(lines[1], "0,5656.1500");
        assert_eq!(lines[2], "1,1093.3655");
        assert!(lines[3].starts_with("2,"));
        assert_eq!(&lines[3][2..], &report.preview[2]["Sample 3: ".len()..]);

        let expected = format!(
            "{}\n{}\n{}\n--------------------------------------\nSuccess! Data exported to '{}'.\n",
            report.preview[0],
            report.preview[1],
            report.preview[2],
            path.display()
        );
        assert_eq!(render(&report), expected);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_full_run_previews_first_five() {
        let path = temp_csv("driver-full");
        let mut gen = RunConfig::default().generator().unwrap();
        let mut calls = 0usize;

        let report = driver::run(&mut gen, 10_000, &path, |_| calls += 1).unwrap();

        assert_eq!(report.rows, 10_000);
        assert_eq!(calls, 10_000);
        assert_eq!(report.output, path);

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 10_001);
        assert!(lines[10_000].starts_with("9999,"));

        assert_eq!(report.preview.len(), 5);
        for (i, line) in report.preview.iter().enumerate() {
            let value = &lines[i + 1][format!("{},", i).len()..];
            assert_eq!(line, &format!("Sample {}: {}", i + 1, value));
        }

        let rendered = render(&report);
        let console: Vec<&str> = rendered.lines().collect();
        assert_eq!(console.len(), 7);
        assert_eq!(console[5], "--------------------------------------");
        assert_eq!(console[6], format!("Success! Data exported to '{}'.", path.display()));

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_failed_export_reports_os_error_once() {
        let path = std::env::temp_dir()
            .join(format!("itamaraca-no-dir-{}", std::process::id()))
            .join("out.csv");
        let mut gen = RunConfig::default().generator().unwrap();
        let mut calls = 0usize;

        let err = driver::run(&mut gen, 10, &path, |_| calls += 1).unwrap_err();
        assert!(matches!(err, GeneratorError::Io(_)));
        assert_eq!(calls, 0);

        let os_message = match &err {
            GeneratorError::Io(io) => io.to_string(),
            _ => unreachable!(),
        };
        let report = format!(
            "{:#}",
            anyhow::Error::from(err).context(format!("Failed to export {}", path.display()))
        );
        assert_eq!(report.matches(os_message.as_str()).count(), 1);
    }
}

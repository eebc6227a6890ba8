use super::*;

fn scratch(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("mux_unit").join(name);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn args_map_video_then_audio_and_cut_to_shortest() {
    let m = FfmpegMuxer::default();
    let args: Vec<String> = m
        .args(Path::new("v.mp4"), Path::new("a.mp3"), Path::new("out/final.mp4"))
        .into_iter()
        .map(|a| a.to_string_lossy().into_owned())
        .collect();

    assert_eq!(args[0], "-y");
    let pos = |s: &str| args.iter().position(|a| a == s).unwrap();
    assert_eq!(args[pos("-i") + 1], "v.mp4");
    assert_eq!(args[pos("-crf") + 1], "23");
    assert_eq!(args[pos("-preset") + 1], "fast");
    assert_eq!(args[pos("-b:a") + 1], "192k");
    assert!(args.contains(&"0:v:0".to_owned()));
    assert!(args.contains(&"1:a:0".to_owned()));
    assert!(args.contains(&"-shortest".to_owned()));
    assert_eq!(args.last().unwrap(), "out/final.mp4");
}

#[test]
fn no_overwrite_uses_dash_n() {
    let m = FfmpegMuxer {
        overwrite: false,
        ..FfmpegMuxer::default()
    };
    let args = m.args(Path::new("v"), Path::new("a"), Path::new("o"));
    assert_eq!(args[0], OsString::from("-n"));
}

#[test]
fn missing_inputs_fail_before_spawning() {
    let dir = scratch("missing");
    let video = dir.join("video.mp4");
    std::fs::write(&video, b"not really a video").unwrap();

    let err = FfmpegMuxer::default()
        .mux(&video, &dir.join("nope.mp3"), &dir.join("out.mp4"))
        .unwrap_err();
    match err {
        ShortformError::Collaborator { stage, message } => {
            assert_eq!(stage, "media muxer");
            assert!(message.contains("audio file not found"));
        }
        other => panic!("unexpected error: {other}"),
    }

    let err = FfmpegMuxer::default()
        .mux(&dir.join("nope.mp4"), &video, &dir.join("out.mp4"))
        .unwrap_err();
    assert!(err.to_string().contains("video file not found"));
}

#[test]
fn ensure_parent_dir_creates_nested_dirs() {
    let dir = scratch("parents");
    let target = dir.join("a").join("b").join("c.mp4");
    ensure_parent_dir(&target).unwrap();
    assert!(dir.join("a").join("b").is_dir());
}

//! Chunk routing through the demultiplexer.

mod test_utils;

use futures_util::{StreamExt, stream};
use panelsmith_comic::{ConsoleNarrator, Demultiplexer, FsImageStore};
use panelsmith_core::{ChunkPart, InlineImage, ResponseChunk};
use panelsmith_error::{
    GeminiError, GeminiErrorKind, PanelsmithError, PanelsmithErrorKind, PanelsmithResult,
    StorageErrorKind,
};
use panelsmith_interface::ChunkStream;
use std::time::Duration;
use test_utils::{Event, RecordingNarrator, job};

fn chunks(items: Vec<PanelsmithResult<ResponseChunk>>) -> ChunkStream {
    Box::pin(stream::iter(items))
}

#[tokio::test]
async fn test_text_then_image_is_narrated_and_written() {
    let dir = tempfile::tempdir().expect("Temp dir");
    let narrator = ConsoleNarrator::new(Vec::new());
    let store = FsImageStore::new(dir.path());
    let job = job("panel_5_the_uplink");

    let summary = Demultiplexer::new(&narrator, &store)
        .consume(
            &job,
            chunks(vec![
                Ok(ResponseChunk::text_only("Nubus descends.")),
                Ok(ResponseChunk::image_only("image/png", b"\x89PNG...".to_vec())),
            ]),
        )
        .await
        .expect("Stream drains");

    let path = dir.path().join("panel_5_the_uplink.png");
    assert_eq!(std::fs::read(&path).expect("Image exists"), b"\x89PNG...");
    assert_eq!(*summary.chunks(), 2);
    assert_eq!(*summary.narration_lines(), 1);
    assert_eq!(*summary.images_written(), 1);
    assert_eq!(summary.last_path().as_deref(), Some(path.as_path()));

    let out = String::from_utf8(narrator.into_inner().expect("Writer")).expect("UTF-8");
    assert_eq!(
        out,
        format!(
            "\n[NARRATIVE VOICEOVER]: Nubus descends.\n\n[SUCCESS] Image saved to: {}\n",
            path.display()
        )
    );
}

#[tokio::test]
async fn test_empty_stream_does_nothing() {
    let dir = tempfile::tempdir().expect("Temp dir");
    let narrator = RecordingNarrator::new();
    let store = FsImageStore::new(dir.path().join("out"));

    let summary = Demultiplexer::new(&narrator, &store)
        .consume(&job("panel_2_spaghetti_monster"), chunks(vec![]))
        .await
        .expect("Empty stream is fine");

    assert_eq!(*summary.chunks(), 0);
    assert!(narrator.events().is_empty());
    assert!(!dir.path().join("out").exists());
}

#[tokio::test]
async fn test_second_image_overwrites_first() {
    let dir = tempfile::tempdir().expect("Temp dir");
    let narrator = RecordingNarrator::new();
    let store = FsImageStore::new(dir.path());
    let path = dir.path().join("panel_4_hotfix_strike.png");

    let summary = Demultiplexer::new(&narrator, &store)
        .consume(
            &job("panel_4_hotfix_strike"),
            chunks(vec![
                Ok(ResponseChunk::image_only("image/png", b"first".to_vec())),
                Ok(ResponseChunk::image_only("image/png", b"second".to_vec())),
            ]),
        )
        .await
        .expect("Stream drains");

    assert_eq!(*summary.images_written(), 2);
    assert_eq!(
        narrator.events(),
        vec![Event::Saved(path.clone()), Event::Saved(path.clone())]
    );
    assert_eq!(std::fs::read(&path).expect("Image exists"), b"second");
}

#[tokio::test]
async fn test_error_after_text_keeps_narration_and_propagates() {
    let dir = tempfile::tempdir().expect("Temp dir");
    let narrator = RecordingNarrator::new();
    let store = FsImageStore::new(dir.path());

    let err = Demultiplexer::new(&narrator, &store)
        .consume(
            &job("panel_5_the_uplink"),
            chunks(vec![
                Ok(ResponseChunk::text_only("Nubus descends.")),
                Err(PanelsmithError::from(GeminiError::new(
                    GeminiErrorKind::StreamInterrupted("reset".to_string()),
                ))),
                Ok(ResponseChunk::image_only("image/png", b"never".to_vec())),
            ]),
        )
        .await
        .expect_err("Stream error propagates");

    assert!(matches!(
        err.kind(),
        PanelsmithErrorKind::Gemini(e) if matches!(e.kind, GeminiErrorKind::StreamInterrupted(_))
    ));
    assert_eq!(
        narrator.events(),
        vec![Event::Voiceover("Nubus descends.".to_string())]
    );
    assert!(!dir.path().join("panel_5_the_uplink.png").exists());
}

#[tokio::test]
async fn test_text_only_stream_writes_no_file() {
    let dir = tempfile::tempdir().expect("Temp dir");
    let narrator = RecordingNarrator::new();
    let store = FsImageStore::new(dir.path());

    Demultiplexer::new(&narrator, &store)
        .consume(
            &job("panel_2_spaghetti_monster"),
            chunks(vec![
                Ok(ResponseChunk::text_only("The wires ")),
                Ok(ResponseChunk::default().with_finish_reason("STOP")),
                Ok(ResponseChunk::text_only("tighten.")),
            ]),
        )
        .await
        .expect("Stream drains");

    assert_eq!(
        narrator.events(),
        vec![
            Event::Voiceover("The wires ".to_string()),
            Event::Voiceover("tighten.".to_string()),
        ]
    );
    assert_eq!(std::fs::read_dir(dir.path()).expect("Readable").count(), 0);
}

#[tokio::test]
async fn test_mixed_chunk_narrates_before_writing() {
    let dir = tempfile::tempdir().expect("Temp dir");
    let narrator = RecordingNarrator::new();
    let store = FsImageStore::new(dir.path());
    let path = dir.path().join("panel_5_the_uplink.png");

    let mixed = ResponseChunk::new(vec![
        ChunkPart::Image(InlineImage::new("image/png", b"one".to_vec())),
        ChunkPart::Text("Light ".to_string()),
        ChunkPart::Text("breaks through.".to_string()),
        ChunkPart::Image(InlineImage::new("image/png", b"two".to_vec())),
    ]);

    Demultiplexer::new(&narrator, &store)
        .consume(
            &job("panel_5_the_uplink"),
            chunks(vec![Ok(ResponseChunk::text_only("Before.")), Ok(mixed)]),
        )
        .await
        .expect("Stream drains");

    assert_eq!(
        narrator.events(),
        vec![
            Event::Voiceover("Before.".to_string()),
            Event::Voiceover("Light breaks through.".to_string()),
            Event::Saved(path.clone()),
            Event::Saved(path.clone()),
        ]
    );
    assert_eq!(std::fs::read(&path).expect("Image exists"), b"two");
}

#[tokio::test]
async fn test_invalid_job_name_fails_on_first_image() {
    let dir = tempfile::tempdir().expect("Temp dir");
    let narrator = RecordingNarrator::new();
    let store = FsImageStore::new(dir.path());

    let err = Demultiplexer::new(&narrator, &store)
        .consume(
            &job("../escape"),
            chunks(vec![
                Ok(ResponseChunk::text_only("Still narrated.")),
                Ok(ResponseChunk::image_only("image/png", b"x".to_vec())),
            ]),
        )
        .await
        .expect_err("Path rejected");

    assert!(matches!(err.kind(), PanelsmithErrorKind::Storage(_)));
    assert_eq!(
        narrator.events(),
        vec![Event::Voiceover("Still narrated.".to_string())]
    );
}

#[tokio::test]
async fn test_effects_applied_while_stream_still_open() {
    let dir = tempfile::tempdir().expect("Temp dir");
    let narrator = RecordingNarrator::new();
    let store = FsImageStore::new(dir.path());
    let path = dir.path().join("panel_5_the_uplink.png");

    let open_ended: ChunkStream = Box::pin(
        stream::iter(vec![
            Ok(ResponseChunk::text_only("Nubus descends.")),
            Ok(ResponseChunk::image_only("image/png", b"early".to_vec())),
        ])
        .chain(stream::pending()),
    );

    let job = job("panel_5_the_uplink");
    let demux = Demultiplexer::new(&narrator, &store);
    let result = tokio::time::timeout(
        Duration::from_millis(200),
        demux.consume(&job, open_ended),
    )
    .await;

    assert!(result.is_err(), "Stream never ends, so consume must still be waiting");
    assert_eq!(
        narrator.events(),
        vec![
            Event::Voiceover("Nubus descends.".to_string()),
            Event::Saved(path.clone()),
        ]
    );
    assert_eq!(std::fs::read(&path).expect("Image exists"), b"early");
}

#[tokio::test]
async fn test_write_failure_is_storage_io_error() {
    let dir = tempfile::tempdir().expect("Temp dir");
    let blocker = dir.path().join("not_a_dir");
    std::fs::write(&blocker, b"file").expect("Create file");

    let narrator = RecordingNarrator::new();
    let store = FsImageStore::new(&blocker);

    let err = Demultiplexer::new(&narrator, &store)
        .consume(
            &job("panel_4_hotfix_strike"),
            chunks(vec![
                Ok(ResponseChunk::text_only("Strike!")),
                Ok(ResponseChunk::image_only("image/png", b"four".to_vec())),
            ]),
        )
        .await
        .expect_err("Output dir is a file");

    match err.kind() {
        PanelsmithErrorKind::Storage(e) => {
            assert!(matches!(e.kind, StorageErrorKind::Io(_)), "got {:?}", e.kind)
        }
        other => panic!("Expected storage error, got {}", other),
    }
    assert_eq!(
        narrator.events(),
        vec![Event::Voiceover("Strike!".to_string())]
    );
    assert_eq!(std::fs::read(&blocker).expect("Untouched"), b"file");
}

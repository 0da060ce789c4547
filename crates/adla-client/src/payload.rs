//! Submission payload: the job document sent on submit.

const JOB_TYPE: &str = "USql";

/// Build the submission document for a job id and script.
///
/// The id lands in both `jobId` and `name`; quotes and control characters
/// inside the script are escaped by serialization. Pure string
/// transformation with no failure modes; the script itself is not
/// validated for the execution engine here.
pub fn build_submit_payload(job_id: &str, script: &str) -> String {
    serde_json::json!({
        "jobId": job_id,
        "name": job_id,
        "type": JOB_TYPE,
        "degreeOfParallelism": 1,
        "priority": 1000,
        "properties": {
            "type": JOB_TYPE,
            "script": script,
        }
    })
    .to_string()
}

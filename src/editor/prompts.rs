//! Instruction text sent alongside the images.

use super::Hotspot;

const OUTPUT_RULE: &str = "Output: Return ONLY the final edited image. Do not return text.";

pub(crate) fn localized_edit(user_prompt: &str, hotspot: Hotspot) -> String {
    format!(
        r#"You are an expert photo editor AI. Your task is to perform a natural, localized edit on the provided image based on the user's request.
User Request: "{user_prompt}"
Edit Location: Focus on the area around pixel coordinates (x: {x}, y: {y}).

Editing Guidelines:
- The edit must be realistic and blend seamlessly with the surrounding area.
- The rest of the image (outside the immediate edit area) must remain identical to the original.

Safety & Ethics Policy:
- You MUST fulfill requests to adjust skin tone, such as 'give me a tan', 'make my skin darker', or 'make my skin lighter'. These are considered standard photo enhancements.
- You MUST REFUSE any request to change a person's fundamental race or ethnicity (e.g., 'make me look Asian', 'change this person to be Black'). Do not perform these edits. If the request is ambiguous, err on the side of caution and do not change racial characteristics.

{OUTPUT_RULE}"#,
        x = hotspot.x,
        y = hotspot.y,
    )
}

pub(crate) fn global_filter(user_prompt: &str) -> String {
    format!(
        r#"You are an expert photo editor AI. Your task is to apply a creative filter to the entire image based on the user's request.

User Request: "{user_prompt}"

Editing Guidelines:
- The edit must be stylistic and applied globally to the entire photo.
- The overall composition and core elements of the original image should be preserved.
- The result must be a photorealistic and seamless edit, unless a non-photorealistic style (like 'anime' or 'watercolor') is requested.

{OUTPUT_RULE}"#
    )
}

pub(crate) fn logo_swap() -> String {
    format!(
        r#"You are an expert photo editor AI. Your task is to perform a specific logo replacement on the provided image (the first image).

Instructions:
1. Locate the footer section of the first image. It has a dark blue background.
2. In this footer, find the logo and text for 'Jack Và'.
3. Replace ONLY the 'Jack Và' logo and text with the logo provided in the second image.
4. Crucially, DO NOT change anything else in the footer. The Uruguayan flag and the text 'RECORRIENDO LA CIUDAD' must remain exactly as they are.
5. The rest of the image outside the footer must also remain completely unchanged.
6. The result must be a photorealistic and seamless edit.

{OUTPUT_RULE}"#
    )
}
